//! lumen-filter - Edge-preserving bilateral filtering
//!
//! This crate provides:
//!
//! - [`SpatialWindow`] - precomputed spatial Gaussian weights
//! - [`bilateral_filter`] / [`bilateral_filter_fpix`] - data-parallel filter
//! - [`bilateral_filter_reference`] / [`bilateral_filter_fpix_reference`] -
//!   sequential reference used to validate the parallel path

pub mod bilateral;
mod error;
pub mod reference;
pub mod window;

pub use error::{FilterError, FilterResult};
pub use window::SpatialWindow;

pub use bilateral::{BilateralParams, MAX_RADIUS, bilateral_filter, bilateral_filter_fpix};
pub use reference::{bilateral_filter_fpix_reference, bilateral_filter_reference};
