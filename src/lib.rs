//! Spell monetary amounts as Spanish words, the way electronic invoices print
//! them in their "valor en letras" field.
//!
//! ```
//! use valor_letras::number_to_words;
//!
//! let words = number_to_words(1234567.89, "USD").unwrap();
//! assert_eq!(words, "UN MILLÓN DOSCIENTOS TREINTA Y CUATRO MIL QUINIENTOS SESENTA Y SIETE DÓLARES CON 89/100");
//! ```
//!
//! The output is uppercase with single spaces and is meant to be embedded in
//! the invoice payload verbatim. Currency codes we don't recognize are named
//! as Colombian pesos rather than rejected.

pub mod error;
#[macro_use]
mod util;
pub mod amount;
pub mod currency;
pub mod spell;

pub use amount::{Amount, MAX_AMOUNT};
pub use currency::{CurrencyCode, CurrencyName, DEFAULT_CURRENCY};
pub use spell::{convert_group, AmountSpeller};

use crate::error::Result;
use rust_decimal::Decimal;

/// Spell a float amount in the given currency.
///
/// Fails if the amount is negative, not finite, or too large to spell.
pub fn number_to_words(amount: f64, currency: &str) -> Result<String> {
    let amount = Amount::from_f64(amount)?;
    Ok(AmountSpeller::new(currency).spell(&amount))
}

/// Spell a decimal amount in the given currency. Cents are rounded exactly.
pub fn decimal_to_words(amount: Decimal, currency: &str) -> Result<String> {
    let amount = Amount::from_decimal(amount)?;
    Ok(AmountSpeller::new(currency).spell(&amount))
}
