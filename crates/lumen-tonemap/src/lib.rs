//! lumen-tonemap - HDR to 8-bit tone mapping
//!
//! Compresses high-dynamic-range luminance in the log domain while keeping
//! each pixel's color ratios:
//!
//! - [`decompose`] - luminance / chrominance split
//! - [`log_luminance`], [`log_range`], [`normalize`] - log-domain
//!   normalization, with the global range from `lumen-reduce`
//! - [`reconstruct`] - recombination into an 8-bit [`lumen_core::Pix`]
//! - [`tone_map`] / [`tone_map_with`] - the full parallel pipeline
//! - [`tone_map_reference`] - sequential reference

mod error;
pub mod params;
pub mod reference;
pub mod tonemap;

pub use error::{ToneMapError, ToneMapResult};
pub use params::{FLAT_MIDPOINT, LUMINANCE_EPSILON, ToneMapParams};
pub use reference::tone_map_reference;
pub use tonemap::{
    LogRange, LuminanceSplit, decompose, log_luminance, log_range, normalize, reconstruct, tone_map,
    tone_map_normalized, tone_map_with,
};
