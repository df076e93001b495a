//! Sequential reference tone mapper
//!
//! A single-threaded rendition of the pipeline: luminance and log values are
//! computed in raster order and the log range comes from a
//! linear scan. Because min and max are exact and the per-pixel arithmetic
//! is the same, the output matches [`crate::tone_map_with`] exactly.

use crate::params::{FLAT_MIDPOINT, ToneMapParams};
use crate::tonemap::check_finite;
use crate::{ToneMapError, ToneMapResult};
use lumen_core::color::clip_to_u8;
use lumen_core::{FPix, Pix};
use lumen_reduce::min_max_linear;

/// Reference tone mapper.
///
/// # Errors
///
/// Same conditions as [`crate::tone_map_with`].
pub fn tone_map_reference(fpix: &FPix, params: &ToneMapParams) -> ToneMapResult<Pix> {
    params.validate()?;
    check_finite(fpix)?;

    let (w, h) = fpix.dimensions();
    let nch = fpix.channels().count();

    let luminance = fpix.luminance();
    let lum = luminance.data();
    let mut log_lum = Vec::with_capacity(lum.len());
    for (i, &l) in lum.iter().enumerate() {
        if !l.is_finite() {
            return Err(ToneMapError::InvalidInput(format!(
                "luminance overflows at pixel {i}"
            )));
        }
        log_lum.push(l.max(params.epsilon).ln());
    }

    let range = min_max_linear(&log_lum)?;
    let span = range.span();

    let mut data = Vec::with_capacity(fpix.data().len());
    let pixels = fpix.data().chunks_exact(nch);
    for ((&l, &ll), px) in lum.iter().zip(&log_lum).zip(pixels) {
        let n = if span > 0.0 {
            ((ll - range.min) / span).clamp(0.0, 1.0)
        } else {
            FLAT_MIDPOINT
        };
        let display = params.display_luminance(n);
        let d = l.max(params.epsilon);
        for &c in px {
            data.push(clip_to_u8(c / d * display));
        }
    }

    Ok(Pix::from_data(w, h, fpix.channels(), data)?)
}
