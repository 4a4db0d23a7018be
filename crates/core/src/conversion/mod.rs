//! Fee, tax and exchange conversion between USD and INR.

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::{
    forward_breakdown, forward_convert, forward_convert_raw, inverse_convert, inverse_convert_raw,
};
pub use error::ConversionError;
pub use types::{FeeSchedule, ForwardBreakdown, InverseOutcome};
