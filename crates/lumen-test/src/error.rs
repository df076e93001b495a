//! Error types for the test helpers

use thiserror::Error;

/// Errors raised while building synthetic test images
#[derive(Debug, Error)]
pub enum TestError {
    /// Image construction failed
    #[error("failed to build test image '{name}': {source}")]
    ImageBuild {
        name: &'static str,
        #[source]
        source: lumen_core::Error,
    },
}

/// Result type for test helper operations
pub type TestResult<T> = Result<T, TestError>;
