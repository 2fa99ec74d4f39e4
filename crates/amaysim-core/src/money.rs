//! # Money Module
//!
//! Provides the `Money` type and the currency formatter.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Catalog prices like $24.90 have no exact binary representation:        │
//! │    24.90 * 2 / 3 = 16.599999999999998  ❌                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2490 cents * 2 groups = 4980 cents  ✅ exact                         │
//! │                                                                         │
//! │  Every rule in the pricing engine is expressed so that it stays in     │
//! │  whole cents. The only rounding step is the promo-code percentage.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use amaysim_core::money::{currency, Money};
//!
//! let price = Money::from_cents(2490); // $24.90
//! let line = price.multiply_quantity(2);
//! assert_eq!(currency(line), "$49.80");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts are computed as negative adjustments
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as a bare integer**: `{"total": 9470}` in JSON quotes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use amaysim_core::money::Money;
    ///
    /// let price = Money::from_cents(990); // $9.90
    /// assert_eq!(price.cents(), 990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use amaysim_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4490); // Unlimited 5GB
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 13470);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns `bps` basis points of this amount, rounded half-up to the cent.
    ///
    /// ## Arguments
    /// * `bps` - Percentage in basis points (1000 = 10%)
    ///
    /// ```rust
    /// use amaysim_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(3480);
    /// assert_eq!(subtotal.percentage(1000).cents(), 348);
    ///
    /// // 10% of $0.05 is half a cent, which rounds up
    /// assert_eq!(Money::from_cents(5).percentage(1000).cents(), 1);
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 keeps the intermediate product from overflowing
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money(cents as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ```rust
    /// use amaysim_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(3480); // $34.80
    /// assert_eq!(subtotal.apply_percentage_discount(1000).cents(), 3132);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        *self - self.percentage(discount_bps)
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Renders an amount as a currency string: `"$"` + dollars + two-digit cents.
///
/// ```rust
/// use amaysim_core::money::{currency, Money};
///
/// assert_eq!(currency(Money::from_cents(20940)), "$209.40");
/// assert_eq!(currency(Money::zero()), "$0.00");
/// ```
pub fn currency(amount: Money) -> String {
    amount.to_string()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Operators
// =============================================================================

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let money = Money::from_cents(2490);
        assert_eq!(money.cents(), 2490);
        assert_eq!(money.dollars(), 24);
        assert_eq!(money.cents_part(), 90);
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(currency(Money::from_cents(9470)), "$94.70");
        assert_eq!(currency(Money::from_cents(3132)), "$31.32");
        assert_eq!(currency(Money::from_cents(5)), "$0.05");
        assert_eq!(currency(Money::from_cents(0)), "$0.00");
        assert_eq!(currency(Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(2490);
        let b = Money::from_cents(990);

        assert_eq!((a + b).cents(), 3480);
        assert_eq!((a - b).cents(), 1500);
        assert_eq!((b * 3).cents(), 2970);

        let mut acc = Money::zero();
        acc += a;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_sum() {
        let total: Money = [2490, 2990, 990]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 6470);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // $0.15 * 10% = 1.5 cents → 2 cents
        assert_eq!(Money::from_cents(15).percentage(1000).cents(), 2);
        // $0.14 * 10% = 1.4 cents → 1 cent
        assert_eq!(Money::from_cents(14).percentage(1000).cents(), 1);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_cents(10000);
        assert_eq!(subtotal.apply_percentage_discount(1000).cents(), 9000);
        assert_eq!(subtotal.apply_percentage_discount(0), subtotal);
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(8470)).unwrap();
        assert_eq!(json, "8470");
    }
}
