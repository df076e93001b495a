//! Lumen Core - Image containers for filtering and tone mapping
//!
//! This crate provides the data structures shared by the lumen crates:
//!
//! - [`Pix`] - 8-bit-per-sample display-domain image
//! - [`FPix`] - Floating-point image (HDR input and intermediate planes)
//! - [`Channels`] - Sample layout (gray or interleaved RGB)
//! - [`color`] - Luminance weighting and display-range helpers
//!
//! Images are dense, row-major and fixed in size for their whole lifetime.

pub mod error;
pub mod fpix;
pub mod pix;

pub use error::{Error, Result};
pub use fpix::FPix;
pub use pix::{Channels, Pix};

/// Luminance weighting and display-range helpers.
///
/// # Luminance
///
/// Luminance uses the ITU-R BT.709 coefficients, which sum to 1 so that a
/// neutral pixel `(v, v, v)` has luminance `v`.
pub mod color {
    /// Red weight (BT.709)
    pub const LUMA_RED: f32 = 0.2126;
    /// Green weight (BT.709)
    pub const LUMA_GREEN: f32 = 0.7152;
    /// Blue weight (BT.709)
    pub const LUMA_BLUE: f32 = 0.0722;

    /// Largest 8-bit display value.
    pub const DISPLAY_MAX: f32 = 255.0;

    /// Weighted luminance of an RGB triple.
    #[inline]
    pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
        LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b
    }

    /// Luminance of one pixel's samples (gray samples are returned as is).
    #[inline]
    pub fn pixel_luminance(samples: &[f32]) -> f32 {
        match samples {
            [v] => *v,
            [r, g, b] => luminance(*r, *g, *b),
            _ => 0.0,
        }
    }

    /// Round half-up and clip to `[0, 255]`. NaN maps to 0.
    #[inline]
    pub fn clip_to_u8(value: f32) -> u8 {
        if value.is_nan() || value <= 0.0 {
            0
        } else if value >= DISPLAY_MAX {
            255
        } else {
            (value + 0.5) as u8
        }
    }

}
