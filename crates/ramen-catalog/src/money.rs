//! Exact money amounts
//!
//! Prices are stored as whole cents so that accumulation never drifts.
//! Catalog payloads carry decimal numbers (`1.75`); those are rounded to the
//! nearest cent once, at the boundary. Arithmetic saturates instead of
//! overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Amount in cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Largest price a catalog choice may carry ($10,000,000,000.00)
    pub const MAX_PRICE: Self = Self(1_000_000_000_000);

    /// Create from a whole number of cents
    #[inline]
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create from a decimal amount, rounding to the nearest cent
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Whole cents
    #[inline]
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Decimal view, for serialization only
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether the amount is below zero
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Sum that clamps at the bounds of the cent range
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self::from_decimal(value)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.as_decimal()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Storefront display format: `$x.yy`, never negative
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0.max(0);
        write!(f, "${}.{:02}", cents / 100, cents % 100)
    }
}
