//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that totals are exact. User
//! input arrives as free text and is parsed as a decimal number, rounded to
//! the nearest cent.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

/// Largest amount a single line item may hold: one trillion currency units
///
/// Typed amounts above this are treated like any other invalid input.
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert a floating-point amount in currency units, rounding to the
    /// nearest cent (half away from zero). Returns `None` for NaN, infinities
    /// and anything larger in magnitude than [`MAX_AMOUNT`].
    pub fn from_units_f64(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        let cents = (units * 100.0).round();
        if cents.abs() > MAX_AMOUNT.0 as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in currency units as a float (used for storage)
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a line item amount typed by the user
    ///
    /// Accepts "1200", "1200.5", "$1,200.50", "1e3" and surrounding
    /// whitespace. Empty input is zero. Returns `None` for anything that is
    /// not a finite, non-negative number no larger than [`MAX_AMOUNT`].
    pub fn parse_amount(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Some(Self::zero());
        }

        let s = s
            .strip_prefix(|c: char| matches!(c, '$' | '€' | '£' | '¥' | '₹'))
            .unwrap_or(s)
            .trim_start();
        let cleaned: String = s.chars().filter(|c| *c != ',').collect();

        // Rust's float parser also accepts "inf" and "nan"; from_units_f64
        // rejects those
        let value: f64 = cleaned.parse().ok()?;
        if value < 0.0 {
            return None;
        }
        Self::from_units_f64(value)
    }

    /// Format with a currency symbol, two decimals and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }

    /// Format rounded to whole currency units (`$1,200`)
    pub fn format_whole(&self, symbol: &str) -> String {
        let rounded = (self.0.unsigned_abs() + 50) / 100;
        let sign = if self.is_negative() && rounded > 0 { "-" } else { "" };
        format!("{}{}{}", sign, symbol, group_thousands(rounded))
    }
}

/// Insert `,` between groups of three digits
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

// Arithmetic saturates at the i64 bounds
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Serde adapter storing an amount as a number of currency units
///
/// Reading is lenient: negative and non-finite numbers come back as zero.
pub mod as_units {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(amount.as_units())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let units = f64::deserialize(deserializer)?;
        if units < 0.0 {
            return Ok(Money::zero());
        }
        Ok(Money::from_units_f64(units).unwrap_or_default())
    }
}
