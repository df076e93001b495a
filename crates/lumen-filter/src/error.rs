//! Error types for lumen-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lumen_core::Error),

    /// Invalid filter parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input image cannot be filtered
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
