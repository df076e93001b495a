//! Error types for lumen-tonemap

use thiserror::Error;

/// Errors that can occur during tone mapping
#[derive(Debug, Error)]
pub enum ToneMapError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lumen_core::Error),

    /// Reduction error
    #[error("reduction error: {0}")]
    Reduce(#[from] lumen_reduce::ReduceError),

    /// Input image cannot be tone mapped (non-finite samples)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid tone-mapping parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for tone-mapping operations
pub type ToneMapResult<T> = Result<T, ToneMapError>;
