//! An `Amount` is a non-negative monetary value split into whole currency
//! units and cents, which is the shape the speller needs.
//!
//! Amounts are built from either an `f64` (what invoice totals usually arrive
//! as) or a `Decimal`. In both cases the cents are the fractional part scaled
//! by 100 and rounded half away from zero. If that rounding lands on 100 cents
//! (ie 4.995) the extra cent is carried into the integer part so we never
//! print "CON 100/100".

use crate::error::{Error, Result};
use rust_decimal::prelude::*;
use std::convert::TryFrom;

/// The largest integer part we can spell (just under one thousand billones).
pub const MAX_AMOUNT: u64 = 999_999_999_999_999;

/// A monetary amount, validated and ready to be spelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, getset::CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[cfg_attr(feature = "with_serde", serde(try_from = "AmountParts"))]
#[getset(get_copy = "pub")]
pub struct Amount {
    /// Whole currency units.
    integer_part: u64,
    /// Hundredths of a unit, 0-99.
    cents: u8,
}

/// The unvalidated wire form of an `Amount`. Deserialization goes through
/// `Amount::new` so the range checks hold for decoded amounts too.
#[cfg(feature = "with_serde")]
#[derive(serde_derive::Deserialize)]
struct AmountParts {
    integer_part: u64,
    cents: u8,
}

#[cfg(feature = "with_serde")]
impl TryFrom<AmountParts> for Amount {
    type Error = Error;

    fn try_from(parts: AmountParts) -> Result<Self> {
        Self::new(parts.integer_part, parts.cents)
    }
}

impl Amount {
    /// Create an amount from its parts.
    pub fn new(integer_part: u64, cents: u8) -> Result<Self> {
        if cents > 99 {
            Err(Error::CentsOutOfRange(cents))?;
        }
        if integer_part > MAX_AMOUNT {
            Err(Error::AmountOutOfRange)?;
        }
        Ok(Self { integer_part, cents })
    }

    /// Split a float into units and cents.
    pub fn from_f64(amount: f64) -> Result<Self> {
        if !amount.is_finite() {
            Err(Error::NonFiniteAmount)?;
        }
        if amount < 0.0 {
            Err(Error::NegativeAmount)?;
        }
        let integer = amount.floor();
        if integer > MAX_AMOUNT as f64 {
            Err(Error::AmountOutOfRange)?;
        }
        let cents = ((amount - integer) * 100.0).round();
        Self::carry(integer as u64, cents as u8)
    }

    /// Split a decimal into units and cents. Unlike `from_f64` the rounding
    /// here is exact.
    pub fn from_decimal(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            Err(Error::NegativeAmount)?;
        }
        // drops the sign from negative zero
        let amount = amount.abs();
        let integer = amount.trunc();
        let cents = ((amount - integer) * Decimal::from(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let integer = integer.to_u64().ok_or(Error::AmountOutOfRange)?;
        let cents = cents.to_u8().ok_or(Error::AmountOutOfRange)?;
        Self::carry(integer, cents)
    }

    /// Build an amount from rounded parts where cents may have rounded up to a
    /// full unit.
    fn carry(integer_part: u64, cents: u8) -> Result<Self> {
        if cents >= 100 {
            let integer_part = integer_part.checked_add(1).ok_or(Error::AmountOutOfRange)?;
            Self::new(integer_part, cents - 100)
        } else {
            Self::new(integer_part, cents)
        }
    }

    /// Returns true if this amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.integer_part == 0 && self.cents == 0
    }
}

impl TryFrom<f64> for Amount {
    type Error = Error;

    fn try_from(amount: f64) -> Result<Self> {
        Self::from_f64(amount)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(amount: Decimal) -> Result<Self> {
        Self::from_decimal(amount)
    }
}
