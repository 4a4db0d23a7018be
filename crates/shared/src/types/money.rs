//! Money display type with decimal precision and currency.
//!
//! Conversion arithmetic runs on `f64`. Amounts only become `Decimal` at the
//! edge, so display rounding is exact and never compounds.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for every supported currency.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    /// The amount in major units (e.g., dollars, rupees).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Indian Rupee
    Inr,
}

impl Currency {
    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates Money from a float amount.
    ///
    /// Returns `None` for NaN, infinities, and values outside `Decimal` range.
    #[must_use]
    pub fn from_f64(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        Decimal::from_f64(amount).map(|amount| Self::new(amount, currency))
    }

    /// Returns the amount rounded to display precision (half away from zero).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formats as symbol, thousands separators and two decimals.
    ///
    /// `Money::new(dec!(-1234.5), Currency::Inr)` renders as `-₹1,234.50`.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self.rounded();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        render(sign, &format!("{:.2}", rounded.abs()), self.currency)
    }
}

/// Formats a float amount the same way as [`Money::display`].
///
/// Amounts beyond `Decimal` range are rendered from the float itself, so
/// only NaN and infinities yield `None`.
#[must_use]
pub fn display_f64(amount: f64, currency: Currency) -> Option<String> {
    if let Some(money) = Money::from_f64(amount, currency) {
        return Some(money.display());
    }
    if !amount.is_finite() {
        return None;
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    Some(render(sign, &format!("{:.2}", amount.abs()), currency))
}

/// Joins sign, symbol, grouped integer digits and fraction.
fn render(sign: &str, digits: &str, currency: Currency) -> String {
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));
    format!(
        "{sign}{}{}.{fraction}",
        currency.symbol(),
        group_thousands(whole)
    )
}

/// Inserts a comma between every group of three integer digits.
fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
