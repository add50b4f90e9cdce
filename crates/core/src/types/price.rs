//! Type-safe price representation using decimal arithmetic.
//!
//! The shop trades in a single currency, so a price is a plain decimal
//! amount in dollars. Arithmetic stays exact; rounding happens only at
//! display time, to two decimals.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount in dollars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal dollar amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents, e.g. `12999` => `$129.99`.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        let abs = cents.unsigned_abs();
        Self(Decimal::from_parts(
            abs as u32,
            (abs >> 32) as u32,
            0,
            cents < 0,
            2,
        ))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Line total for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Multiply by a fractional rate (e.g. a tax rate). The result keeps
    /// full precision; rounding is deferred to display.
    #[must_use]
    pub fn scale_by(&self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}

impl std::fmt::Display for Price {
    /// Formats as `$123.45`, rounded to the nearest cent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cents = (self.0 * Decimal::ONE_HUNDRED).round().to_i64().unwrap_or(0);
        write!(f, "${}.{:02}", cents / 100, cents.rem_euclid(100))
    }
}
