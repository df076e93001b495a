//! Error types for lumen-core
//!
//! Provides a unified error type for the image containers. Each variant
//! captures enough context for diagnostics without exposing internal
//! layout details.

use thiserror::Error;

/// lumen-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) in {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Channel index out of range for the image layout
    #[error("channel {channel} out of range for {count}-channel image")]
    ChannelOutOfRange { channel: usize, count: usize },

    /// Raw buffer length does not match the declared geometry
    #[error("data length {actual} doesn't match {width}x{height}x{channels} = {expected}")]
    DataLength {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Channel layout mismatch between two images
    #[error("channel layout mismatch: {0:?} vs {1:?}")]
    ChannelMismatch(crate::Channels, crate::Channels),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for lumen-core operations
pub type Result<T> = std::result::Result<T, Error>;
