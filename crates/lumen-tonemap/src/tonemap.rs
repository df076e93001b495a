//! Log-domain luminance compression
//!
//! # Algorithm
//!
//! ```text
//! L      = 0.2126 R + 0.7152 G + 0.0722 B       (gray: L = sample)
//! chroma = C / max(L, ε)                         per channel
//! l      = ln(max(L, ε))
//! n      = (l - min l) / (max l - min l)         0.5 when max l == min l
//! L'     = exp(n · ln(D + 1)) - 1                D = display_max
//! out    = clip(chroma · L')
//! ```
//!
//! The global log-luminance range comes from the parallel tree reduction in
//! `lumen-reduce`; every other stage is an independent per-pixel map run on
//! the rayon pool. Any ordering of the pixel work gives the same output.

use crate::params::{FLAT_MIDPOINT, ToneMapParams};
use crate::{ToneMapError, ToneMapResult};
use log::debug;
use lumen_core::color::pixel_luminance;
use lumen_core::{Channels, FPix, Pix};
use lumen_reduce::{MinMax, reduce_min_max};
use rayon::prelude::*;

/// Global log-luminance range
pub type LogRange = MinMax;

/// An HDR image split into luminance and per-channel chrominance ratios
#[derive(Debug, Clone)]
pub struct LuminanceSplit {
    /// Single-channel luminance, unclamped
    pub luminance: FPix,
    /// Input samples divided by the clamped luminance (same layout as input)
    pub chroma: FPix,
}

pub(crate) fn check_finite(fpix: &FPix) -> ToneMapResult<()> {
    match fpix.first_non_finite() {
        Some((idx, v)) => Err(ToneMapError::InvalidInput(format!(
            "non-finite sample {v} at index {idx}"
        ))),
        None => Ok(()),
    }
}

/// Split `fpix` into luminance and chrominance.
///
/// # Errors
///
/// Returns [`ToneMapError::InvalidInput`] if any sample is NaN or infinite,
/// or if a pixel's luminance overflows.
pub fn decompose(fpix: &FPix, params: &ToneMapParams) -> ToneMapResult<LuminanceSplit> {
    check_finite(fpix)?;
    let (w, h) = fpix.dimensions();
    let nch = fpix.channels().count();

    let lum: Vec<f32> = fpix.data().par_chunks(nch).map(pixel_luminance).collect();
    if let Some(idx) = lum.iter().position(|v| !v.is_finite()) {
        return Err(ToneMapError::InvalidInput(format!(
            "luminance overflows at pixel {idx}"
        )));
    }

    let mut chroma = fpix.clone();
    chroma
        .data_mut()
        .par_chunks_mut(nch)
        .zip(lum.par_iter())
        .for_each(|(px, &l)| {
            let d = l.max(params.epsilon);
            for v in px {
                *v /= d;
            }
        });

    Ok(LuminanceSplit {
        luminance: FPix::from_data(w, h, Channels::Gray, lum)?,
        chroma,
    })
}

/// Natural log of each luminance value, clamped below at `epsilon`.
pub fn log_luminance(luminance: &FPix, epsilon: f32) -> FPix {
    let mut out = luminance.clone();
    out.data_mut()
        .par_iter_mut()
        .for_each(|v| *v = v.max(epsilon).ln());
    out
}

/// Global minimum and maximum of the log-luminance map.
pub fn log_range(log_lum: &FPix) -> ToneMapResult<LogRange> {
    Ok(reduce_min_max(log_lum.data())?)
}

/// Map `log_lum` linearly onto `[0, 1]` using `range`.
///
/// A flat range sets every value to exactly [`FLAT_MIDPOINT`].
pub fn normalize(log_lum: &FPix, range: LogRange) -> FPix {
    let mut out = log_lum.clone();
    let span = range.span();
    if span > 0.0 {
        out.data_mut()
            .par_iter_mut()
            .for_each(|v| *v = ((*v - range.min) / span).clamp(0.0, 1.0));
    } else {
        out.data_mut().fill(FLAT_MIDPOINT);
    }
    out
}

/// Recombine normalized luminance with the chrominance ratios.
///
/// # Errors
///
/// Returns [`lumen_core::Error`] (wrapped) if `normalized` and the
/// chrominance image disagree in size.
pub fn reconstruct(
    split: &LuminanceSplit,
    normalized: &FPix,
    params: &ToneMapParams,
) -> ToneMapResult<Pix> {
    split.luminance.check_same_geometry(normalized)?;
    let nch = split.chroma.channels().count();

    let mut out = split.chroma.clone();
    out.data_mut()
        .par_chunks_mut(nch)
        .zip(normalized.data().par_iter())
        .for_each(|(px, &n)| {
            let display = params.display_luminance(n);
            for v in px {
                *v *= display;
            }
        });
    Ok(out.to_pix())
}

/// Normalized log-luminance map of `fpix` (values in `[0, 1]`).
pub fn tone_map_normalized(fpix: &FPix, params: &ToneMapParams) -> ToneMapResult<FPix> {
    params.validate()?;
    let split = decompose(fpix, params)?;
    let log_lum = log_luminance(&split.luminance, params.epsilon);
    let range = log_range(&log_lum)?;
    Ok(normalize(&log_lum, range))
}

/// Tone map an HDR image to 8 bits with the default parameters.
///
/// # Example
///
/// ```
/// use lumen_core::{Channels, FPix};
/// use lumen_tonemap::tone_map;
///
/// let hdr = FPix::from_data(3, 1, Channels::Gray, vec![1.0, 10.0, 100.0]).unwrap();
/// let out = tone_map(&hdr).unwrap();
/// assert_eq!(out.get(0, 0, 0).unwrap(), 0);
/// assert_eq!(out.get(2, 0, 0).unwrap(), 255);
/// ```
pub fn tone_map(fpix: &FPix) -> ToneMapResult<Pix> {
    tone_map_with(fpix, &ToneMapParams::default())
}

/// Tone map an HDR image to 8 bits.
///
/// # Errors
///
/// Returns [`ToneMapError::InvalidParameter`] for invalid parameters and
/// [`ToneMapError::InvalidInput`] for non-finite input.
pub fn tone_map_with(fpix: &FPix, params: &ToneMapParams) -> ToneMapResult<Pix> {
    params.validate()?;
    let split = decompose(fpix, params)?;
    let log_lum = log_luminance(&split.luminance, params.epsilon);
    let range = log_range(&log_lum)?;
    debug!(
        "tone map: {}x{} {:?}, log luminance [{}, {}]",
        fpix.width(),
        fpix.height(),
        fpix.channels(),
        range.min,
        range.max
    );
    let normalized = normalize(&log_lum, range);
    reconstruct(&split, &normalized, params)
}
