//! Conversion error types.

use paycalc_shared::AppError;
use thiserror::Error;

/// Conversion-related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The fee factor or the rate-after-tax is exactly zero, so the target
    /// cannot be solved for.
    #[error("Invalid parameters. Please check your rates/fees.")]
    InvalidParameters,
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidParameters => Self::InvalidParameters(err.to_string()),
        }
    }
}
