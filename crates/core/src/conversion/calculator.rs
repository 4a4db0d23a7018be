//! Forward and inverse payout arithmetic.
//!
//! Forward: USD received -> percentage fee -> fixed fee -> tax -> INR.
//!
//! Inverse solves `((y * (1 - p)) - f) * (1 - t) * r = target` for `y`:
//!
//! ```text
//! y = ((target / (r * (1 - t))) + f) / (1 - p)
//! ```
//!
//! No clamping or rounding happens here. Fees larger than the amount give a
//! negative INR figure and that is returned as is.

use super::types::{FeeSchedule, ForwardBreakdown, InverseOutcome};

/// Computes every stage of a forward conversion.
#[must_use]
pub fn forward_breakdown(amount_usd: f64, schedule: &FeeSchedule) -> ForwardBreakdown {
    let net_after_percent_fee = amount_usd * schedule.fee_factor();
    let net_after_fees = net_after_percent_fee - schedule.fixed_fee;
    let net_after_tax = net_after_fees * schedule.tax_factor();
    let inr = net_after_tax * schedule.exchange_rate;

    ForwardBreakdown {
        net_after_percent_fee,
        net_after_fees,
        net_after_tax,
        inr,
    }
}

/// Returns the INR received for `amount_usd` under `schedule`.
///
/// # Example
///
/// ```
/// use paycalc_core::conversion::{FeeSchedule, forward_convert};
///
/// let inr = forward_convert(100.0, &FeeSchedule::new(4.4, 0.30, 0.0, 82.0));
/// assert!((inr - 7814.6).abs() < 1e-9);
/// ```
#[must_use]
pub fn forward_convert(amount_usd: f64, schedule: &FeeSchedule) -> f64 {
    forward_breakdown(amount_usd, schedule).inr
}

/// Returns the USD amount that nets `target_inr` under `schedule`.
///
/// A schedule with a zero fee factor or a zero rate-after-tax yields
/// [`InverseOutcome::degenerate`] instead of dividing by zero.
///
/// # Example
///
/// ```
/// use paycalc_core::conversion::{FeeSchedule, inverse_convert};
///
/// let outcome = inverse_convert(5000.0, &FeeSchedule::new(100.0, 0.30, 0.0, 82.0));
/// assert!(outcome.degenerate);
/// assert_eq!(outcome.value, 0.0);
/// ```
#[must_use]
pub fn inverse_convert(target_inr: f64, schedule: &FeeSchedule) -> InverseOutcome {
    if schedule.is_degenerate() {
        return InverseOutcome::degenerate();
    }

    let net_usd = target_inr / schedule.inr_per_net_usd();
    InverseOutcome::solved((net_usd + schedule.fixed_fee) / schedule.fee_factor())
}

/// Five-argument form of [`forward_convert`].
#[must_use]
pub fn forward_convert_raw(
    amount_usd: f64,
    fee_percent: f64,
    fixed_fee: f64,
    tax_percent: f64,
    exchange_rate: f64,
) -> f64 {
    forward_convert(
        amount_usd,
        &FeeSchedule::new(fee_percent, fixed_fee, tax_percent, exchange_rate),
    )
}

/// Five-argument form of [`inverse_convert`].
#[must_use]
pub fn inverse_convert_raw(
    target_inr: f64,
    fee_percent: f64,
    fixed_fee: f64,
    tax_percent: f64,
    exchange_rate: f64,
) -> InverseOutcome {
    inverse_convert(
        target_inr,
        &FeeSchedule::new(fee_percent, fixed_fee, tax_percent, exchange_rate),
    )
}
