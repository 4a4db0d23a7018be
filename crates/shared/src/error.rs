//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Inputs were well-formed but the calculation is undefined for them.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The calculation overflowed to a non-finite result.
    #[error("Result out of range: {0}")]
    OutOfRange(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::InvalidParameters(_) | Self::OutOfRange(_) => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidParameters(_) => "INVALID_PARAMETERS",
            Self::OutOfRange(_) => "RESULT_OUT_OF_RANGE",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }

    /// Returns the message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::InvalidParameters(msg)
            | Self::OutOfRange(msg)
            | Self::NotFound(msg) => msg,
        }
    }
}
