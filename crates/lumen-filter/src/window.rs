//! Spatial weighting window
//!
//! A square table of Gaussian weights indexed by offset from the window
//! center. It is built once per filter invocation and shared read-only by
//! every pixel worker.

use crate::{FilterError, FilterResult};

/// Precomputed spatial Gaussian over a `(2r+1) x (2r+1)` window
///
/// The weight at offset `(dx, dy)` is `exp(-(dx² + dy²) / (2σ²))`; the
/// center weight is exactly 1. Weights are not normalized since the filter
/// divides by the sum of the taps it actually uses.
#[derive(Debug, Clone)]
pub struct SpatialWindow {
    radius: u32,
    sigma: f32,
    weights: Vec<f32>,
}

/// Spatial weight at squared distance `dist2`.
#[inline]
pub(crate) fn gaussian_weight(dist2: f32, sigma: f32) -> f32 {
    (-dist2 / (2.0 * sigma * sigma)).exp()
}

impl SpatialWindow {
    /// Build the window for `radius` and spatial standard deviation `sigma`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `radius == 0` or
    /// `sigma` is not a positive finite number.
    pub fn new(radius: u32, sigma: f32) -> FilterResult<Self> {
        if radius == 0 {
            return Err(FilterError::InvalidParameter(
                "radius must be at least 1".to_string(),
            ));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(FilterError::InvalidParameter(format!(
                "spatial sigma must be positive and finite, got {sigma}"
            )));
        }

        let r = radius as i32;
        let side = (2 * radius + 1) as usize;
        let mut weights = Vec::with_capacity(side * side);
        for dy in -r..=r {
            for dx in -r..=r {
                weights.push(gaussian_weight((dx * dx + dy * dy) as f32, sigma));
            }
        }

        Ok(SpatialWindow {
            radius,
            sigma,
            weights,
        })
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Side length `2r + 1`.
    #[inline]
    pub fn side(&self) -> u32 {
        2 * self.radius + 1
    }

    #[inline]
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Weight at offset `(dx, dy)` from the center.
    ///
    /// # Panics
    ///
    /// Panics if either offset exceeds the radius.
    #[inline]
    pub fn get(&self, dx: i32, dy: i32) -> f32 {
        let r = self.radius as i32;
        let side = self.side() as usize;
        self.weights[((dy + r) as usize) * side + (dx + r) as usize]
    }

    /// Row-major weights, top-left offset first.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}
