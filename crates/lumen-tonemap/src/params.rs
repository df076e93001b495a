//! Tone-mapping constants and parameters

use crate::{ToneMapError, ToneMapResult};
use lumen_core::color::DISPLAY_MAX;

/// Luminance floor applied before the logarithm
pub const LUMINANCE_EPSILON: f32 = 1e-4;

/// Normalized value of every pixel of a flat-luminance image
pub const FLAT_MIDPOINT: f32 = 0.5;

/// Tone-mapping parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapParams {
    /// Luminance values at or below this are clamped to it before `ln`
    pub epsilon: f32,
    /// Top of the display range (at most 255)
    pub display_max: f32,
}

impl Default for ToneMapParams {
    fn default() -> Self {
        ToneMapParams {
            epsilon: LUMINANCE_EPSILON,
            display_max: DISPLAY_MAX,
        }
    }
}

impl ToneMapParams {
    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ToneMapError::InvalidParameter`] unless `epsilon` is
    /// positive and finite and `display_max` lies in `(0, 255]`.
    pub fn validate(&self) -> ToneMapResult<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ToneMapError::InvalidParameter(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(self.display_max > 0.0 && self.display_max <= DISPLAY_MAX) {
            return Err(ToneMapError::InvalidParameter(format!(
                "display_max must be in (0, {}], got {}",
                DISPLAY_MAX, self.display_max
            )));
        }
        Ok(())
    }

    /// `ln(display_max + 1)`: scales a normalized value so that
    /// `exp(n · range) - 1` spans `[0, display_max]`.
    #[inline]
    pub fn target_log_range(&self) -> f32 {
        (self.display_max + 1.0).ln()
    }

    /// Display luminance for a normalized log-luminance value.
    #[inline]
    pub fn display_luminance(&self, normalized: f32) -> f32 {
        (normalized * self.target_log_range()).exp() - 1.0
    }
}
