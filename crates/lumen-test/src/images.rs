//! Deterministic synthetic test images
//!
//! Every generator is a pure function of its arguments. The noise images
//! use a fixed linear congruential sequence so that a failing test can be
//! reproduced exactly.

use crate::error::{TestError, TestResult};
use lumen_core::{Channels, FPix, Pix};

/// 64-bit LCG (Knuth's MMIX constants)
#[derive(Debug, Clone)]
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed ^ 0x9e37_79b9_7f4a_7c15)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) as u32
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 23) as f32
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        for i in (1..values.len()).rev() {
            let j = (self.next_u32() as usize) % (i + 1);
            values.swap(i, j);
        }
    }
}

fn build_pix(
    name: &'static str,
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
) -> TestResult<Pix> {
    Pix::from_data(width, height, channels, data)
        .map_err(|source| TestError::ImageBuild { name, source })
}

fn build_fpix(
    name: &'static str,
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<f32>,
) -> TestResult<FPix> {
    FPix::from_data(width, height, channels, data)
        .map_err(|source| TestError::ImageBuild { name, source })
}

/// Gray image, `left` for `x < width / 2`, `right` elsewhere.
pub fn step_edge_gray(width: u32, height: u32, left: u8, right: u8) -> TestResult<Pix> {
    let data = (0..height)
        .flat_map(|_| (0..width).map(move |x| if x < width / 2 { left } else { right }))
        .collect();
    build_pix("step_edge_gray", width, height, Channels::Gray, data)
}

/// Gray horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn ramp_gray(width: u32, height: u32) -> TestResult<Pix> {
    let denom = width.saturating_sub(1).max(1) as f32;
    let data = (0..height)
        .flat_map(|_| (0..width).map(move |x| (255.0 * x as f32 / denom + 0.5) as u8))
        .collect();
    build_pix("ramp_gray", width, height, Channels::Gray, data)
}

/// RGB image made of four flat quadrants of distinct colors.
pub fn quadrants_rgb(width: u32, height: u32) -> TestResult<Pix> {
    const COLORS: [[u8; 3]; 4] = [[200, 40, 40], [40, 200, 40], [40, 40, 200], [220, 220, 60]];
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let q = usize::from(x >= width / 2) + 2 * usize::from(y >= height / 2);
            data.extend_from_slice(&COLORS[q]);
        }
    }
    build_pix("quadrants_rgb", width, height, Channels::Rgb, data)
}

/// Uniform noise in `[0, 255]`.
pub fn noise(width: u32, height: u32, channels: Channels, seed: u64) -> TestResult<Pix> {
    let mut rng = Lcg::new(seed);
    let n = (width as usize) * (height as usize) * channels.count();
    let data = (0..n).map(|_| (rng.next_u32() & 0xff) as u8).collect();
    build_pix("noise", width, height, channels, data)
}

/// HDR RGB image whose luminance spans `[lo, hi]` logarithmically.
///
/// Columns advance through the range left to right; rows tint the color
/// so that chrominance varies across the image.
pub fn hdr_log_ramp(width: u32, height: u32, lo: f32, hi: f32) -> TestResult<FPix> {
    let denom = width.saturating_sub(1).max(1) as f32;
    let (llo, lhi) = (lo.ln(), hi.ln());
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        let tint = 0.5 + 0.5 * (y as f32 / height.max(1) as f32);
        for x in 0..width {
            let v = (llo + (lhi - llo) * x as f32 / denom).exp();
            data.extend_from_slice(&[v * tint, v, v * (1.5 - tint)]);
        }
    }
    build_fpix("hdr_log_ramp", width, height, Channels::Rgb, data)
}

/// HDR RGB image of random positive radiances spanning several decades.
pub fn hdr_noise(width: u32, height: u32, seed: u64) -> TestResult<FPix> {
    let mut rng = Lcg::new(seed);
    let n = (width as usize) * (height as usize) * 3;
    let data = (0..n)
        .map(|_| 10f32.powf(rng.next_f32() * 6.0 - 3.0))
        .collect();
    build_fpix("hdr_noise", width, height, Channels::Rgb, data)
}

/// Gray float image from explicit values (row-major).
pub fn fpix_gray(width: u32, height: u32, values: &[f32]) -> TestResult<FPix> {
    build_fpix("fpix_gray", width, height, Channels::Gray, values.to_vec())
}
