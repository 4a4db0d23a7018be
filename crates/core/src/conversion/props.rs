//! Property-based tests for conversion arithmetic.
//!
//! - Inverse then forward recovers the target
//! - Degenerate schedules always yield the zero sentinel
//! - Forward is strictly increasing in the amount

use proptest::prelude::*;

use super::calculator::{forward_breakdown, forward_convert, inverse_convert};
use super::types::FeeSchedule;

/// Strategy to generate invertible schedules.
fn invertible_schedule() -> impl Strategy<Value = FeeSchedule> {
    (0.0f64..99.99, 0.0f64..100.0, 0.0f64..99.99, 0.5f64..200.0).prop_map(
        |(fee_percent, fixed_fee, tax_percent, exchange_rate)| {
            FeeSchedule::new(fee_percent, fixed_fee, tax_percent, exchange_rate)
        },
    )
}

/// Strategy to generate arbitrary (possibly out-of-range) parameters.
fn any_parameter() -> impl Strategy<Value = f64> {
    -1_000.0f64..1_000.0
}

/// Strategy to generate INR targets (0 to 10,000,000).
fn target_inr() -> impl Strategy<Value = f64> {
    0.0f64..10_000_000.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any invertible schedule and target, forward(inverse(target))
    /// SHALL equal target within floating-point tolerance.
    #[test]
    fn prop_round_trip_recovers_target(
        schedule in invertible_schedule(),
        target in target_inr(),
    ) {
        let outcome = inverse_convert(target, &schedule);
        prop_assert!(!outcome.degenerate);

        let recovered = forward_convert(outcome.value, &schedule);
        let scale = target.abs() + schedule.fixed_fee * schedule.exchange_rate + 1.0;
        prop_assert!(
            (recovered - target).abs() <= 1e-9 * scale,
            "target {} recovered as {}", target, recovered
        );
    }

    /// A 100% fee SHALL be degenerate whatever the other parameters are.
    #[test]
    fn prop_full_fee_is_degenerate(
        target in any_parameter(),
        fixed_fee in any_parameter(),
        tax_percent in any_parameter(),
        exchange_rate in any_parameter(),
    ) {
        let schedule = FeeSchedule::new(100.0, fixed_fee, tax_percent, exchange_rate);
        let outcome = inverse_convert(target, &schedule);
        prop_assert!(outcome.degenerate);
        prop_assert_eq!(outcome.value, 0.0);
    }

    /// A 100% tax SHALL be degenerate.
    #[test]
    fn prop_full_tax_is_degenerate(
        target in any_parameter(),
        fee_percent in any_parameter(),
        fixed_fee in any_parameter(),
        exchange_rate in any_parameter(),
    ) {
        let schedule = FeeSchedule::new(fee_percent, fixed_fee, 100.0, exchange_rate);
        let outcome = inverse_convert(target, &schedule);
        prop_assert!(outcome.degenerate);
        prop_assert_eq!(outcome.value, 0.0);
    }

    /// A zero exchange rate SHALL be degenerate.
    #[test]
    fn prop_zero_rate_is_degenerate(
        target in any_parameter(),
        fee_percent in any_parameter(),
        fixed_fee in any_parameter(),
        tax_percent in any_parameter(),
    ) {
        let schedule = FeeSchedule::new(fee_percent, fixed_fee, tax_percent, 0.0);
        let outcome = inverse_convert(target, &schedule);
        prop_assert!(outcome.degenerate);
        prop_assert_eq!(outcome.value, 0.0);
    }

    /// Sending more USD SHALL always net more INR.
    #[test]
    fn prop_forward_strictly_increasing(
        schedule in invertible_schedule(),
        amount in 0.0f64..1_000_000.0,
        delta in 0.01f64..10_000.0,
    ) {
        let lower = forward_convert(amount, &schedule);
        let higher = forward_convert(amount + delta, &schedule);
        prop_assert!(higher > lower, "{} should exceed {}", higher, lower);
    }

    /// The breakdown's final stage SHALL be exactly the forward result.
    #[test]
    fn prop_breakdown_agrees_with_forward(
        schedule in invertible_schedule(),
        amount in 0.0f64..1_000_000.0,
    ) {
        let breakdown = forward_breakdown(amount, &schedule);
        prop_assert_eq!(breakdown.inr.to_bits(), forward_convert(amount, &schedule).to_bits());
    }
}
