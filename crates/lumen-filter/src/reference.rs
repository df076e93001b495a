//! Sequential reference bilateral filter
//!
//! A direct, single-threaded rendition of the filter formula. It evaluates
//! the spatial Gaussian per tap instead of reading a precomputed window and
//! walks pixels in raster order. It exists to validate the parallel path;
//! the two agree to within floating-point rounding.

use crate::bilateral::{BilateralParams, check_finite, range_weight};
use crate::window::gaussian_weight;
use crate::FilterResult;
use lumen_core::color::DISPLAY_MAX;
use lumen_core::{FPix, Pix};

/// Reference bilateral filter for floating-point images.
///
/// # Errors
///
/// Same conditions as [`crate::bilateral_filter_fpix`].
pub fn bilateral_filter_fpix_reference(fpix: &FPix, params: &BilateralParams) -> FilterResult<FPix> {
    params.validate()?;
    check_finite(fpix)?;

    let sigma = params.effective_spatial_sigma();
    let coefficient = params.range_coefficient();
    let r = params.radius as i32;
    let (w, h) = fpix.dimensions();
    let nch = fpix.channels().count();
    let mut out = fpix.create_template();

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let center = fpix.pixel(x as u32, y as u32);
            let mut sums = vec![0.0f64; nch];
            let mut weight_sum = 0.0f64;

            for dy in -r..=r {
                for dx in -r..=r {
                    // Clamp to image boundaries (replicate border)
                    let sx = (x + dx).clamp(0, w as i32 - 1) as u32;
                    let sy = (y + dy).clamp(0, h as i32 - 1) as u32;
                    let neighbor = fpix.pixel(sx, sy);

                    let mut dist2 = 0.0f64;
                    for c in 0..nch {
                        let d = f64::from(center[c]) - f64::from(neighbor[c]);
                        dist2 += d * d;
                    }

                    let spatial = gaussian_weight((dx * dx + dy * dy) as f32, sigma);
                    let weight = f64::from(spatial) * range_weight(dist2, coefficient);
                    for c in 0..nch {
                        sums[c] += weight * f64::from(neighbor[c]);
                    }
                    weight_sum += weight;
                }
            }

            for (c, sum) in sums.iter().enumerate() {
                out.set_unchecked(x as u32, y as u32, c, (sum / weight_sum) as f32);
            }
        }
    }

    Ok(out)
}

/// Reference bilateral filter for 8-bit images (normalized `[0, 1]` scale).
pub fn bilateral_filter_reference(pix: &Pix, params: &BilateralParams) -> FilterResult<Pix> {
    let normalized = FPix::from_pix(pix).scaled(1.0 / DISPLAY_MAX);
    let filtered = bilateral_filter_fpix_reference(&normalized, params)?;
    Ok(filtered.scaled(DISPLAY_MAX).to_pix())
}
