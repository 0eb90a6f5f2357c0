//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The shop trades in a
//! single currency (US dollars), so no currency tag is carried.
//!
//! On the wire, money is a plain decimal number of dollars (`1290`, `49.99`),
//! which is the shape persisted cart snapshots use.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Number of minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// Display symbol for the shop currency.
pub const CURRENCY_SYMBOL: &str = "$";

/// ISO 4217 code for the shop currency.
pub const CURRENCY_CODE: &str = "USD";

/// A monetary value in the shop currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use auro_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Create a Money value from whole dollars.
    pub const fn from_units(units: i64) -> Self {
        Self::new(units * CENTS_PER_UNIT)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        if self.is_negative() {
            format!("-{}{}", CURRENCY_SYMBOL, Money::new(-self.amount_cents).display_amount())
        } else {
            format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
        }
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let cents = self.amount_cents.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}.{:02}",
            sign,
            cents / CENTS_PER_UNIT as u64,
            cents % CENTS_PER_UNIT as u64
        )
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Multiply by a scalar, saturating at the numeric bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Multiply by a decimal factor (e.g., for markups).
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::new((self.amount_cents as f64 * factor).round() as i64)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Sum an iterator of Money values, saturating at the numeric bounds.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_sub(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.amount_cents % CENTS_PER_UNIT == 0 {
            serializer.serialize_i64(self.amount_cents / CENTS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

/// Reads a JSON number of dollars, rounded to the nearest cent.
///
/// Sub-cent amounts are normalized on load, so a snapshot holding `0.125`
/// is written back as `0.13`.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("money amount must be finite"));
        }
        Ok(Money::from_decimal(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(1290.0).amount_cents, 129_000);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::from_units(1290).display(), "$1290.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::new(-150).display(), "-$1.50");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::new(1000) + Money::new(500);
        assert_eq!(c.amount_cents, 1500);
        assert_eq!(Money::new(i64::MAX).try_add(&Money::new(1)), None);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!(Money::new(1000).multiply(2).amount_cents, 2000);
        assert_eq!(Money::new(i64::MAX).multiply(2).amount_cents, i64::MAX);
        assert_eq!(Money::new(i64::MAX).try_multiply(2), None);
    }

    #[test]
    fn test_money_markup() {
        let price = Money::from_units(56);
        assert_eq!(price.multiply_decimal(1.15).display(), "$64.40");
        assert_eq!(Money::from_units(100).percentage(10.0).amount_cents, 1000);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(100), Money::new(250)];
        assert_eq!(Money::sum(values.iter()).amount_cents, 350);
        let total: Money = values.into_iter().sum();
        assert_eq!(total.amount_cents, 350);
    }

    #[test]
    fn test_money_serializes_as_decimal_number() {
        assert_eq!(serde_json::to_string(&Money::from_units(100)).unwrap(), "100");
        assert_eq!(serde_json::to_string(&Money::new(4999)).unwrap(), "49.99");
        let m: Money = serde_json::from_str("49.99").unwrap();
        assert_eq!(m.amount_cents, 4999);
        let m: Money = serde_json::from_str("1290").unwrap();
        assert_eq!(m.amount_cents, 129_000);
    }

    #[test]
    fn test_money_rejects_non_number() {
        assert!(serde_json::from_str::<Money>(r#""12""#).is_err());
    }

    #[test]
    fn test_money_sub_cent_amounts_round_on_load() {
        let m: Money = serde_json::from_str("0.125").unwrap();
        assert_eq!(m.amount_cents, 13);
        assert_eq!(serde_json::to_string(&m).unwrap(), "0.13");

        let m: Money = serde_json::from_str("19.994").unwrap();
        assert_eq!(m, Money::new(1999));
    }
}
