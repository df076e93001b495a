//! Bilateral filtering (edge-preserving smoothing)
//!
//! Bilateral filtering is a non-linear, edge-preserving smoothing filter.
//! It combines a spatial Gaussian filter with a range (intensity) Gaussian
//! filter, so uniform regions are smoothed while edges are preserved.
//!
//! # Algorithm
//!
//! For each pixel `p`, the output is a weighted average over the window of
//! radius `r` centered on `p`:
//!
//! ```text
//! out[p] = Σ w_s(p,q) · w_r(I[p], I[q]) · I[q] / Σ w_s(p,q) · w_r(I[p], I[q])
//! w_s    = exp(-‖p-q‖² / (2σs²))          (precomputed SpatialWindow)
//! w_r    = exp(-‖I[p]-I[q]‖² / (2·l2norm²))
//! ```
//!
//! The range distance is the Euclidean norm over all channels of the two
//! pixels, so every channel of a pixel pair gets the same weight. Window
//! taps outside the image are clamped to the nearest edge pixel.
//!
//! Every output pixel depends only on the input, so rows are dispatched to
//! the rayon pool with no shared mutable state. The result does not depend
//! on the order in which pixels are processed.
//!
//! # Example
//!
//! ```
//! use lumen_core::{Channels, Pix};
//! use lumen_filter::{BilateralParams, bilateral_filter};
//!
//! let pix = Pix::new_with_value(16, 16, Channels::Rgb, 90).unwrap();
//! let out = bilateral_filter(&pix, &BilateralParams::new(0.1, 3)).unwrap();
//! assert_eq!(out, pix);
//! ```

use crate::window::SpatialWindow;
use crate::{FilterError, FilterResult};
use log::debug;
use lumen_core::color::DISPLAY_MAX;
use lumen_core::{FPix, Pix};
use rayon::prelude::*;

/// Largest accepted window radius
pub const MAX_RADIUS: u32 = 512;

/// Bilateral filter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilateralParams {
    /// Standard deviation of the range (intensity difference) Gaussian
    pub l2norm: f32,
    /// Window radius; the window side is `2 * radius + 1`
    pub radius: u32,
    /// Spatial standard deviation; `None` derives it from the radius
    pub spatial_sigma: Option<f32>,
}

impl Default for BilateralParams {
    fn default() -> Self {
        BilateralParams {
            l2norm: 1.0,
            radius: 5,
            spatial_sigma: None,
        }
    }
}

impl BilateralParams {
    pub fn new(l2norm: f32, radius: u32) -> Self {
        BilateralParams {
            l2norm,
            radius,
            spatial_sigma: None,
        }
    }

    pub fn with_spatial_sigma(mut self, sigma: f32) -> Self {
        self.spatial_sigma = Some(sigma);
        self
    }

    /// Spatial sigma in use: the explicit value, or `radius / 2` (at least 0.5).
    pub fn effective_spatial_sigma(&self) -> f32 {
        self.spatial_sigma
            .unwrap_or_else(|| (self.radius as f32 / 2.0).max(0.5))
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if the radius is 0 or
    /// above [`MAX_RADIUS`], or if `l2norm` or the spatial sigma is not a
    /// positive finite number.
    pub fn validate(&self) -> FilterResult<()> {
        if self.radius == 0 {
            return Err(FilterError::InvalidParameter(
                "radius must be at least 1".to_string(),
            ));
        }
        if self.radius > MAX_RADIUS {
            return Err(FilterError::InvalidParameter(format!(
                "radius {} exceeds maximum {}",
                self.radius, MAX_RADIUS
            )));
        }
        if !(self.l2norm.is_finite() && self.l2norm > 0.0) {
            return Err(FilterError::InvalidParameter(format!(
                "l2norm must be positive and finite, got {}",
                self.l2norm
            )));
        }
        let sigma = self.effective_spatial_sigma();
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(FilterError::InvalidParameter(format!(
                "spatial sigma must be positive and finite, got {sigma}"
            )));
        }
        Ok(())
    }

    /// `1 / (2 · l2norm²)`, evaluated in f64 so it stays finite and
    /// non-zero for every valid `l2norm`.
    #[inline]
    pub(crate) fn range_coefficient(&self) -> f64 {
        let l2norm = f64::from(self.l2norm);
        1.0 / (2.0 * l2norm * l2norm)
    }
}

/// Range weight for squared intensity distance `dist2`.
///
/// Identical intensities always weigh 1, so a vanishing `l2norm` (infinite
/// coefficient) never produces `0 · ∞`.
#[inline]
pub(crate) fn range_weight(dist2: f64, coefficient: f64) -> f64 {
    if dist2 == 0.0 {
        1.0
    } else {
        (-dist2 * coefficient).exp()
    }
}

pub(crate) fn check_finite(fpix: &FPix) -> FilterResult<()> {
    match fpix.first_non_finite() {
        Some((idx, v)) => Err(FilterError::InvalidInput(format!(
            "non-finite sample {v} at index {idx}"
        ))),
        None => Ok(()),
    }
}

/// Filter one pixel into `out` (one slot per channel).
///
/// The center tap has weight 1, so the divisor is never below 1. Sums are
/// kept in f64: the spatial weights add up to more than 1, so an f32
/// numerator overflows for samples near `f32::MAX`.
#[inline]
fn filter_pixel(
    src: &FPix,
    x: u32,
    y: u32,
    window: &SpatialWindow,
    coefficient: f64,
    out: &mut [f32],
) {
    let r = window.radius() as i32;
    let max_x = src.width() as i32 - 1;
    let max_y = src.height() as i32 - 1;
    let center = src.pixel(x, y);

    let mut acc = [0.0f64; 3];
    let mut weight_sum = 0.0f64;

    for dy in -r..=r {
        let sy = (y as i32 + dy).clamp(0, max_y) as u32;
        for dx in -r..=r {
            let sx = (x as i32 + dx).clamp(0, max_x) as u32;
            let neighbor = src.pixel(sx, sy);

            let dist2: f64 = center
                .iter()
                .zip(neighbor)
                .map(|(&a, &b)| {
                    let d = f64::from(a) - f64::from(b);
                    d * d
                })
                .sum();
            let weight = f64::from(window.get(dx, dy)) * range_weight(dist2, coefficient);

            for (a, &v) in acc.iter_mut().zip(neighbor) {
                *a += weight * f64::from(v);
            }
            weight_sum += weight;
        }
    }

    for (o, a) in out.iter_mut().zip(acc) {
        *o = (a / weight_sum) as f32;
    }
}

/// Apply the bilateral filter to a floating-point image
///
/// Samples are filtered on their raw scale, so `l2norm` is expressed in
/// the image's own units.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] for invalid parameters and
/// [`FilterError::InvalidInput`] if any sample is NaN or infinite.
pub fn bilateral_filter_fpix(fpix: &FPix, params: &BilateralParams) -> FilterResult<FPix> {
    params.validate()?;
    check_finite(fpix)?;

    let window = SpatialWindow::new(params.radius, params.effective_spatial_sigma())?;
    let coefficient = params.range_coefficient();
    let nch = fpix.channels().count();
    let width = fpix.width();

    debug!(
        "bilateral: {}x{} {:?}, radius {}, l2norm {}, sigma {}",
        width,
        fpix.height(),
        fpix.channels(),
        params.radius,
        params.l2norm,
        window.sigma()
    );

    let mut out = fpix.create_template();
    let row_len = out.row_len();
    out.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(nch).enumerate() {
                filter_pixel(fpix, x as u32, y as u32, &window, coefficient, px);
            }
        });

    Ok(out)
}

/// Apply the bilateral filter to an 8-bit image
///
/// Samples are filtered on the normalized `[0, 1]` scale (sample / 255), so
/// `l2norm` means the same thing here as for an `FPix` holding normalized
/// data. The result is rounded back to 8 bits.
///
/// # Example
///
/// ```
/// use lumen_core::{Channels, Pix};
/// use lumen_filter::{BilateralParams, bilateral_filter};
///
/// let pix = Pix::new_with_value(4, 4, Channels::Gray, 100).unwrap();
/// let out = bilateral_filter(&pix, &BilateralParams::new(1.0, 2)).unwrap();
/// assert!(out.data().iter().all(|&v| v == 100));
/// ```
pub fn bilateral_filter(pix: &Pix, params: &BilateralParams) -> FilterResult<Pix> {
    let normalized = FPix::from_pix(pix).scaled(1.0 / DISPLAY_MAX);
    let filtered = bilateral_filter_fpix(&normalized, params)?;
    Ok(filtered.scaled(DISPLAY_MAX).to_pix())
}
