//! Lumen - Edge-preserving smoothing and HDR tone mapping for Rust
//!
//! # Overview
//!
//! Lumen provides two image transforms, each with a data-parallel path
//! and a sequential reference path that validates it:
//!
//! - Bilateral filtering (spatial and range Gaussian weighting)
//! - Log-domain HDR tone mapping to 8-bit display values
//! - Parallel min/max tree reduction feeding the tone mapper
//! - Image I/O (PNG, JPEG, TIFF, BMP, PNM, Radiance HDR, OpenEXR)
//!
//! # Example
//!
//! ```
//! use lumen::filter::{BilateralParams, bilateral_filter};
//! use lumen::tonemap::tone_map;
//! use lumen::{Channels, FPix, Pix};
//!
//! let pix = Pix::new_with_value(64, 48, Channels::Rgb, 128).unwrap();
//! let smooth = bilateral_filter(&pix, &BilateralParams::default()).unwrap();
//! assert_eq!(smooth.dimensions(), (64, 48));
//!
//! let hdr = FPix::new_with_value(64, 48, Channels::Rgb, 250.0).unwrap();
//! let ldr = tone_map(&hdr).unwrap();
//! assert_eq!(ldr.channels(), Channels::Rgb);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use lumen_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use lumen_filter as filter;
pub use lumen_io as io;
pub use lumen_reduce as reduce;
pub use lumen_tonemap as tonemap;
