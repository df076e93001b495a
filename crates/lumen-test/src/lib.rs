//! lumen-test - Regression test helpers for lumen
//!
//! This crate provides the comparison bookkeeping used by the `*_reg.rs`
//! regression tests and a set of deterministic synthetic images, so the
//! tests need no binary fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use lumen_test::{RegParams, images};
//!
//! let mut rp = RegParams::new("bilateral");
//! let pix = images::step_edge_gray(32, 32, 50, 200)?;
//! rp.compare_values(32.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod images;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;
