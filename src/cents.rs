//! Whole-cent monetary amounts.
//!
//! Every amount in an ABA file is a non-negative integer number of cents.
//! Decimal dollar input is converted with `rust_decimal` so no floating
//! point ever touches a value.

use crate::error::{AbaError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A non-negative amount in cents.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use cemtext_aba::Cents;
///
/// let amount = Cents::from_str("5000").unwrap();
/// assert_eq!(amount, Cents::parse_dollars("50.00").unwrap());
/// assert_eq!(amount.to_string(), "5000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(u64);

impl Cents {
    /// Zero value.
    pub const ZERO: Self = Cents(0);

    /// Wraps a raw cent count.
    pub const fn new(cents: u64) -> Self {
        Cents(cents)
    }

    /// Returns the raw cent count.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Absolute difference between two amounts.
    pub fn abs_diff(self, other: Self) -> Self {
        Cents(self.0.abs_diff(other.0))
    }

    /// Converts a dollar amount with at most two decimal places.
    pub fn from_dollars(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AbaError::validation("amount", "must not be negative"));
        }

        let cents = value * Decimal::ONE_HUNDRED;
        if !cents.fract().is_zero() {
            return Err(AbaError::validation(
                "amount",
                format!("{} has fractions of a cent", value),
            ));
        }

        cents
            .trunc()
            .to_u64()
            .map(Cents)
            .ok_or_else(|| AbaError::validation("amount", format!("{} is out of range", value)))
    }

    /// Parses a decimal dollar string such as `"50.00"`.
    pub fn parse_dollars(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|e| AbaError::validation("amount", format!("{:?}: {}", trimmed, e)))?;
        Self::from_dollars(value)
    }
}

impl FromStr for Cents {
    type Err = AbaError;

    /// Accepts ASCII digits only, with no surrounding whitespace.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AbaError::validation(
                "amount",
                format!("{:?} is not a whole number of cents", s),
            ));
        }

        s.parse::<u64>()
            .map(Cents)
            .map_err(|e| AbaError::validation("amount", e.to_string()))
    }
}

impl From<u64> for Cents {
    fn from(cents: u64) -> Self {
        Cents(cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Cents(self.0 - rhs.0)
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}
