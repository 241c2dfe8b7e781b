//! The speller turns a full `Amount` into the "valor en letras" line printed
//! on an invoice, ie
//!
//! ```text
//! UN MILLÓN DOSCIENTOS TREINTA Y CUATRO MIL QUINIENTOS SESENTA Y SIETE DÓLARES CON 89/100
//! ```
//!
//! The integer part is split into billones, millones, thousands and units,
//! each group is spelled with [convert_group][0] and joined with its scale
//! word. The currency name agrees with the integer part only: "UN PESO CON
//! 50/100" is singular even though the amount is above one.
//!
//! [0]: ../group/fn.convert_group.html

use crate::{
    amount::{Amount, MAX_AMOUNT},
    currency::{CurrencyCode, CurrencyName},
    spell::group::group_words,
};
use tracing::trace;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000_000;

/// Spells amounts in a given currency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmountSpeller {
    currency: CurrencyCode,
}

impl AmountSpeller {
    /// Create a speller for the given ISO currency code. Codes we don't know
    /// fall back to COP naming.
    pub fn new<T: AsRef<str>>(currency: T) -> Self {
        Self::with_currency(CurrencyCode::resolve(currency.as_ref()))
    }

    /// Create a speller for an already-resolved currency.
    pub fn with_currency(currency: CurrencyCode) -> Self {
        Self { currency }
    }

    /// The currency this speller names amounts in.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Spell an amount in words.
    pub fn spell(&self, amount: &Amount) -> String {
        let name: &CurrencyName = self.currency.name();
        let integer_part = amount.integer_part();
        let mut segments = if integer_part == 0 {
            vec![String::from("CERO")]
        } else {
            integer_words(integer_part)
        };
        segments.push(name.for_units(integer_part).into());
        if amount.cents() > 0 {
            segments.push(format!("CON {:02}/100", amount.cents()));
        }
        let words = segments.join(" ");
        trace!("spelled {}.{:02} {} as {:?}", integer_part, amount.cents(), self.currency, words);
        words
    }
}

impl Default for AmountSpeller {
    fn default() -> Self {
        Self::with_currency(CurrencyCode::default())
    }
}

/// Spell a non-zero integer as a list of segments, one per scale.
fn integer_words(n: u64) -> Vec<String> {
    debug_assert!(n <= MAX_AMOUNT, "integer part {} is too large to spell", n);
    let billones = n / BILLION;
    let millones = (n % BILLION) / MILLION;
    let mut segments = Vec::new();

    match billones {
        0 => {}
        1 => segments.push("UN BILLÓN".into()),
        _ => segments.push(format!("{} BILLONES", group_words(billones as u16))),
    }
    // the millions count can itself run into the thousands ("MIL MILLONES")
    match millones {
        0 => {}
        1 => segments.push("UN MILLÓN".into()),
        _ => segments.push(format!("{} MILLONES", below_million(millones).join(" "))),
    }
    segments.extend(below_million(n % MILLION));
    segments
}

/// Spell a number under one million as its thousands and units segments.
/// Zero yields no segments.
fn below_million(n: u64) -> Vec<String> {
    debug_assert!(n < MILLION, "{} is not below one million", n);
    let miles = (n / THOUSAND) as u16;
    let cientos = (n % THOUSAND) as u16;
    let mut segments = Vec::new();

    match miles {
        0 => {}
        1 => segments.push("MIL".into()),
        _ => segments.push(format!("{} MIL", group_words(miles))),
    }
    if cientos > 0 {
        segments.push(group_words(cientos));
    }
    segments
}
