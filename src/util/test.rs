//! Shortcuts for spelling literal amounts in tests.

use crate::{
    amount::Amount,
    currency::DEFAULT_CURRENCY,
    spell::AmountSpeller,
};

/// Spell a float amount in the given currency, panicking on bad input.
pub(crate) fn spell(amount: f64, currency: &str) -> String {
    let amount = Amount::from_f64(amount).unwrap();
    AmountSpeller::new(currency).spell(&amount)
}

/// Spell a float amount in Colombian pesos.
pub(crate) fn cop(amount: f64) -> String {
    spell(amount, DEFAULT_CURRENCY)
}
