//! Error types for mfe-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid instrument identifier: {0:?}")]
    InvalidInstrument(String),

    #[error("Invalid UTC offset: {0} minutes")]
    InvalidUtcOffset(i32),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
