//! Error types for mclock-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid wall-clock time: {0}")]
    InvalidTime(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
