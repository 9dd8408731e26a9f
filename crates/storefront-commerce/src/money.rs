//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. Catalog prices keep every digit they were
//! written with, basket totals are exact sums of the line amounts, and
//! rounding to pence happens only when an amount is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Symbol of the store currency.
pub const CURRENCY_SYMBOL: &str = "\u{00a3}";

/// Decimal places shown for the store currency.
const DISPLAY_SCALE: u32 = 2;

/// A monetary value in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in pounds.
    pub amount: Decimal,
}

impl Money {
    /// Create a new Money value from pence.
    pub fn new(pence: i64) -> Self {
        Self::from_decimal(Decimal::new(pence, DISPLAY_SCALE))
    }

    /// Create a Money value from an exact amount in pounds.
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::from_decimal(Decimal::ZERO)
    }

    /// Read a price written as a JSON number.
    ///
    /// The value is taken as written (`0.005` stays `0.005`), not as the
    /// nearest binary fraction. Returns `None` for values a decimal cannot
    /// hold, such as NaN or infinities.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_f64(49.99).unwrap();
    /// assert_eq!(price, Money::new(4999));
    /// ```
    pub fn from_f64(amount: f64) -> Option<Self> {
        amount.to_string().parse().ok().map(Self::from_decimal)
    }

    /// Convert to the nearest `f64`, for the catalog file schema.
    pub fn to_f64(&self) -> f64 {
        self.amount.to_string().parse().unwrap_or_default()
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Multiply by a quantity, saturating at the representable range.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::from_decimal(self.amount.saturating_mul(Decimal::from(quantity)))
    }

    /// The amount rounded to whole pence, halves away from zero.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        rounded
    }

    /// Format as a display string (e.g., "£49.99").
    pub fn display(&self) -> String {
        let sign = if self.rounded() < Decimal::ZERO { "-" } else { "" };
        format!("{}{}{}", sign, CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format as a display string without symbol or sign (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        self.rounded().abs().to_string()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_decimal(self.amount.saturating_add(other.amount))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
