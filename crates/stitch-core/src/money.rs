//! # Money Module
//!
//! Provides the `Money` type for order prices and revenue totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing floats drifts:                                                 │
//! │    48.1 + 72.2 = 120.30000000000001  ❌                                 │
//! │                                                                         │
//! │  OUR SOLUTION: round once into integer cents, then add cents           │
//! │    4810 + 7220 = 12030 cents = 120.30  ✓                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing config values stay decimal (they are user-entered numbers); the
//! pricing engine sums them and rounds the result exactly once with
//! [`Money::from_decimal`]. From there on every price is whole cents.
//!
//! ## Wire Format
//! Money serializes as a plain JSON number with two-decimal precision
//! (`4800` cents → `48.0`), which is what the order form expects.
//!
//! ## Usage
//! ```rust
//! use stitch_core::money::Money;
//!
//! let price = Money::from_decimal(45.0 + 3.0);
//! assert_eq!(price.cents(), 4800);
//!
//! let total = price + Money::from_cents(7200);
//! assert_eq!(total.to_string(), "120.00");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never has to care about underflow
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Custom serde**: decimal number on the wire, cents in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest decimal magnitude accepted when reading a stored amount.
pub const MAX_DECIMAL: f64 = 1_000_000_000_000.0;

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stitch_core::money::Money;
    ///
    /// let price = Money::from_cents(7199);
    /// assert_eq!(price.cents(), 7199);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to the nearest cent, half away from zero.
    ///
    /// ## Rounding
    /// ```text
    /// 48.004  → 48.00
    /// 48.005  → 48.01   (half rounds up for positive values)
    /// -0.125  → -0.13   (half rounds away from zero)
    /// ```
    ///
    /// Non-finite input maps to zero; callers validate numbers before they
    /// reach this point.
    ///
    /// ## Example
    /// ```rust
    /// use stitch_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(72.0).cents(), 7200);
    /// assert_eq!(Money::from_decimal(10.125).cents(), 1013);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        // f64::round is half-away-from-zero. The epsilon nudge keeps values
        // like 10.125 (stored as 10.12499999...) on the intended side.
        let scaled = amount * 100.0;
        let nudged = scaled + scaled.signum() * 1e-9;
        Money(nudged.round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal number (for JSON and display).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering, no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Saturates at the i64 bounds instead of wrapping.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("money must be a finite number"));
        }
        if amount.abs() > MAX_DECIMAL {
            return Err(serde::de::Error::custom(format!(
                "money must not exceed {MAX_DECIMAL} in magnitude"
            )));
        }
        Ok(Money::from_decimal(amount))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_rounds_half_away_from_zero() {
        assert_eq!(Money::from_decimal(48.0).cents(), 4800);
        assert_eq!(Money::from_decimal(48.004).cents(), 4800);
        assert_eq!(Money::from_decimal(48.005).cents(), 4801);
        assert_eq!(Money::from_decimal(10.125).cents(), 1013);
        assert_eq!(Money::from_decimal(-0.125).cents(), -13);
        assert_eq!(Money::from_decimal(f64::NAN).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(4810), Money::from_cents(7220)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 12030);
        assert_eq!(total.to_string(), "120.30");
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let json = serde_json::to_string(&Money::from_cents(7199)).unwrap();
        assert_eq!(json, "71.99");

        let back: Money = serde_json::from_str("48").unwrap();
        assert_eq!(back.cents(), 4800);
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(!Money::from_cents(-1).is_zero());
    }

    #[test]
    fn test_add_saturates() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!((big + Money::from_cents(100)).cents(), i64::MAX);

        let total: Money = [big, big, big].iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut acc = big;
        acc += big;
        assert_eq!(acc.cents(), i64::MAX);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e20").is_err());
        assert!(serde_json::from_str::<Money>("-1e13").is_err());

        let max: Money = serde_json::from_str("1000000000000").unwrap();
        assert_eq!(max.cents(), 100_000_000_000_000);
    }
}
