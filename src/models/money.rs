//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift
//! when summing. On disk an amount is a plain JSON number with at most two
//! decimals (`12.5`, `40`, `3.99`), so files stay readable and editable by
//! hand.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest absolute amount accepted, in cents (ten trillion currency units)
pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Arithmetic saturates at the `i64` range instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Round a decimal value to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and anything beyond `MAX_CENTS`.
    pub fn from_f64(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > MAX_CENTS as f64 {
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

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a floating-point number of currency units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Whether this amount is at least `fraction` of `whole`
    ///
    /// Compared exactly in integer arithmetic; `fraction` is taken to a
    /// hundredth of a percent (0.9 -> 9000 basis points).
    pub fn reaches_share_of(&self, whole: Money, fraction: f64) -> bool {
        let basis_points = (fraction * 10_000.0).round() as i128;
        i128::from(self.0) * 10_000 >= i128::from(whole.0) * basis_points
    }

    /// Parse a money amount from a string
    ///
    /// Accepts any decimal number ("10.5", "-3", "1e2", "$10.50") and rounds
    /// it to two decimal places. Amounts beyond `MAX_CENTS` are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let number = trimmed.strip_prefix('$').unwrap_or(trimmed);

        let value: f64 = number
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Self::from_f64(value).ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))
    }

    /// Format as a bare two-decimal number ("10.50", "-3.00")
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.abs().to_decimal_string())
        } else {
            format!("{}{}", symbol, self.to_decimal_string())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole amounts are written as integers ("40", not "40.0")
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| de::Error::custom("amount must be a finite number within range"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
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
        self.0 = self.0.saturating_sub(other.0);
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

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
