//! Conversion parameter and result types.

use paycalc_shared::CalculatorConfig;
use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// Fees, tax and rate applied to a USD receipt before it lands as INR.
///
/// Percentages are expressed on a 0-100 scale. Nothing here is validated:
/// out-of-range values flow straight through the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Percentage of the gross amount deducted as fee.
    pub fee_percent: f64,
    /// Flat fee in USD, deducted after the percentage fee.
    pub fixed_fee: f64,
    /// Percentage of the post-fee USD deducted as tax.
    pub tax_percent: f64,
    /// 1 USD = `exchange_rate` INR.
    pub exchange_rate: f64,
}

impl FeeSchedule {
    /// Creates a new fee schedule.
    #[must_use]
    pub const fn new(fee_percent: f64, fixed_fee: f64, tax_percent: f64, exchange_rate: f64) -> Self {
        Self {
            fee_percent,
            fixed_fee,
            tax_percent,
            exchange_rate,
        }
    }

    /// Share of the gross kept after the percentage fee, `1 - fee/100`.
    #[must_use]
    pub fn fee_factor(&self) -> f64 {
        1.0 - self.fee_percent / 100.0
    }

    /// Share of the post-fee amount kept after tax, `1 - tax/100`.
    #[must_use]
    pub fn tax_factor(&self) -> f64 {
        1.0 - self.tax_percent / 100.0
    }

    /// INR obtained per post-fee USD, `rate * (1 - tax/100)`.
    #[must_use]
    pub fn inr_per_net_usd(&self) -> f64 {
        self.exchange_rate * self.tax_factor()
    }

    /// Returns true if the schedule cannot be inverted.
    ///
    /// Either factor being exactly zero makes the inverse a division by zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.inr_per_net_usd() == 0.0 || self.fee_factor() == 0.0
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::from(&CalculatorConfig::default())
    }
}

impl From<&CalculatorConfig> for FeeSchedule {
    fn from(config: &CalculatorConfig) -> Self {
        Self::new(
            config.fee_percent,
            config.fixed_fee,
            config.tax_percent,
            config.exchange_rate,
        )
    }
}

/// Intermediate stages of a forward conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardBreakdown {
    /// USD left after the percentage fee.
    pub net_after_percent_fee: f64,
    /// USD left after the fixed fee.
    pub net_after_fees: f64,
    /// USD left after tax.
    pub net_after_tax: f64,
    /// Final INR amount.
    pub inr: f64,
}

/// Result of an inverse conversion.
///
/// A degenerate schedule yields `value == 0.0` with `degenerate == true`, so a
/// legitimately zero answer can be told apart from a failed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InverseOutcome {
    /// USD to invoice, or `0.0` when degenerate.
    pub value: f64,
    /// Whether the schedule made the inversion undefined.
    pub degenerate: bool,
}

impl InverseOutcome {
    /// Outcome for a successfully inverted schedule.
    #[must_use]
    pub const fn solved(value: f64) -> Self {
        Self {
            value,
            degenerate: false,
        }
    }

    /// Outcome for a schedule that cannot be inverted.
    #[must_use]
    pub const fn degenerate() -> Self {
        Self {
            value: 0.0,
            degenerate: true,
        }
    }

    /// Converts into a `Result`, mapping degenerate outcomes to
    /// [`ConversionError::InvalidParameters`].
    pub fn into_result(self) -> Result<f64, ConversionError> {
        if self.degenerate {
            Err(ConversionError::InvalidParameters)
        } else {
            Ok(self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = FeeSchedule::default();
        assert!((schedule.fee_percent - 4.4).abs() < f64::EPSILON);
        assert!((schedule.fixed_fee - 0.30).abs() < f64::EPSILON);
        assert_eq!(schedule.tax_percent, 0.0);
        assert!((schedule.exchange_rate - 82.0).abs() < f64::EPSILON);
        assert!(!schedule.is_degenerate());
    }

    #[test]
    fn test_from_calculator_config() {
        let config = CalculatorConfig {
            exchange_rate: 83.5,
            ..CalculatorConfig::default()
        };
        let schedule = FeeSchedule::from(&config);
        assert!((schedule.exchange_rate - 83.5).abs() < f64::EPSILON);
        assert!((schedule.fee_percent - config.fee_percent).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factors() {
        let schedule = FeeSchedule::new(10.0, 0.0, 25.0, 80.0);
        assert!((schedule.fee_factor() - 0.9).abs() < 1e-12);
        assert!((schedule.tax_factor() - 0.75).abs() < 1e-12);
        assert!((schedule.inr_per_net_usd() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(FeeSchedule::new(100.0, 0.30, 0.0, 82.0).is_degenerate());
        assert!(FeeSchedule::new(4.4, 0.30, 100.0, 82.0).is_degenerate());
        assert!(FeeSchedule::new(4.4, 0.30, 0.0, 0.0).is_degenerate());
        assert!(!FeeSchedule::new(99.9, 0.30, 99.9, 0.01).is_degenerate());
    }

    #[test]
    fn test_outcome_into_result() {
        let value = InverseOutcome::solved(12.5).into_result().unwrap();
        assert!((value - 12.5).abs() < f64::EPSILON);
        assert!(matches!(
            InverseOutcome::degenerate().into_result(),
            Err(ConversionError::InvalidParameters)
        ));
    }

    #[test]
    fn test_solved_zero_is_not_degenerate() {
        let outcome = InverseOutcome::solved(0.0);
        assert!(!outcome.degenerate);
        assert_eq!(outcome.into_result().unwrap(), 0.0);
    }
}
