//! Error types for lumen-reduce

use thiserror::Error;

/// Errors that can occur during a reduction
#[derive(Debug, Error)]
pub enum ReduceError {
    /// The input cannot be reduced (empty, or holds NaN)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid engine configuration
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for reductions
pub type ReduceResult<T> = Result<T, ReduceError>;
