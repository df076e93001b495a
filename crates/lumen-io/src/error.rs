//! I/O error types
//!
//! Every codec error from the `image` crate is mapped into an `IoError`
//! variant so that callers only handle one error type.

use image::ImageError;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not recognized or not enabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] lumen_core::Error),
}

impl IoError {
    pub(crate) fn from_decode(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) => IoError::Io(e),
            ImageError::Unsupported(e) => IoError::UnsupportedFormat(e.to_string()),
            ImageError::Limits(e) => IoError::InvalidData(e.to_string()),
            other => IoError::DecodeError(other.to_string()),
        }
    }

    pub(crate) fn from_encode(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) => IoError::Io(e),
            ImageError::Unsupported(e) => IoError::UnsupportedFormat(e.to_string()),
            ImageError::Parameter(e) => IoError::InvalidData(e.to_string()),
            other => IoError::EncodeError(other.to_string()),
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
