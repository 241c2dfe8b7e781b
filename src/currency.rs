//! The currency module maps ISO currency codes to the Spanish names printed
//! after a spelled amount ("UN PESO", "DOS DÓLARES").
//!
//! All supported currencies live in a single static table. Lookups that go
//! through [CurrencyCode::resolve] never fail: an unrecognized code falls back
//! to the Colombian peso, which is what invoices issued without an explicit
//! currency are denominated in.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The code used when the caller does not specify a currency.
pub const DEFAULT_CURRENCY: &str = "COP";

/// The currencies we know how to name.
///
/// The discriminants index directly into the currency table, so the variant
/// order must match it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "UPPERCASE"))]
pub enum CurrencyCode {
    Cop,
    Usd,
    Eur,
    Mxn,
    Ars,
    Clp,
    Pen,
    Brl,
}

/// The singular/plural pair for a currency name, ie "PESO"/"PESOS".
#[derive(Clone, Copy, Debug, PartialEq, Eq, getset::CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize))]
#[getset(get_copy = "pub")]
pub struct CurrencyName {
    /// Used when the integer part of the amount is exactly one.
    singular: &'static str,
    /// Used for everything else, zero included.
    plural: &'static str,
}

impl CurrencyName {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// Pick the name form that agrees with the given integer amount.
    pub fn for_units(&self, integer_part: u64) -> &'static str {
        if integer_part == 1 {
            self.singular
        } else {
            self.plural
        }
    }
}

static CURRENCIES: [(CurrencyCode, &str, CurrencyName); 8] = [
    (CurrencyCode::Cop, "COP", CurrencyName::new("PESO", "PESOS")),
    (CurrencyCode::Usd, "USD", CurrencyName::new("DÓLAR", "DÓLARES")),
    (CurrencyCode::Eur, "EUR", CurrencyName::new("EURO", "EUROS")),
    (CurrencyCode::Mxn, "MXN", CurrencyName::new("PESO", "PESOS")),
    (CurrencyCode::Ars, "ARS", CurrencyName::new("PESO", "PESOS")),
    (CurrencyCode::Clp, "CLP", CurrencyName::new("PESO", "PESOS")),
    (CurrencyCode::Pen, "PEN", CurrencyName::new("SOL", "SOLES")),
    (CurrencyCode::Brl, "BRL", CurrencyName::new("REAL", "REALES")),
];

impl CurrencyCode {
    /// Look up a currency by its exact ISO code.
    pub fn from_code(code: &str) -> Option<CurrencyCode> {
        CURRENCIES.iter()
            .find(|(_, iso, _)| *iso == code)
            .map(|(currency, _, _)| *currency)
    }

    /// Look up a currency by its ISO code, falling back to the default
    /// currency (COP) if the code isn't one we know.
    pub fn resolve(code: &str) -> CurrencyCode {
        match Self::from_code(code) {
            Some(currency) => currency,
            None => {
                debug!("unknown currency code {:?}, falling back to {}", code, DEFAULT_CURRENCY);
                CurrencyCode::default()
            }
        }
    }

    /// The ISO code for this currency.
    pub fn code(&self) -> &'static str {
        CURRENCIES[*self as usize].1
    }

    /// The Spanish name forms for this currency.
    pub fn name(&self) -> &'static CurrencyName {
        &CURRENCIES[*self as usize].2
    }

    /// Every supported currency, in table order.
    pub fn all() -> impl Iterator<Item = CurrencyCode> {
        CURRENCIES.iter().map(|(currency, _, _)| *currency)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::Cop
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| Error::UnknownCurrency(code.into()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_discriminants() {
        for (idx, (currency, code, _)) in CURRENCIES.iter().enumerate() {
            assert_eq!(*currency as usize, idx);
            assert_eq!(currency.code(), *code);
        }
        assert_eq!(CurrencyCode::all().count(), CURRENCIES.len());
    }

    #[test]
    fn looks_up_codes() {
        assert_eq!(CurrencyCode::from_code("USD"), Some(CurrencyCode::Usd));
        assert_eq!(CurrencyCode::from_code("PEN"), Some(CurrencyCode::Pen));
        assert_eq!(CurrencyCode::from_code("XYZ"), None);
        // lookups are exact, same as the invoice payloads send them
        assert_eq!(CurrencyCode::from_code("usd"), None);
        assert_eq!(CurrencyCode::from_code(DEFAULT_CURRENCY), Some(CurrencyCode::default()));
    }

    #[test]
    fn resolves_unknown_to_pesos() {
        let currency = CurrencyCode::resolve("XYZ");
        assert_eq!(currency, CurrencyCode::Cop);
        assert_eq!(currency.name().singular(), "PESO");
        assert_eq!(currency.name().plural(), "PESOS");
        assert_eq!(CurrencyCode::resolve(""), CurrencyCode::Cop);
        assert_eq!(CurrencyCode::resolve("BRL"), CurrencyCode::Brl);
    }

    #[test]
    fn names() {
        assert_eq!(CurrencyCode::Usd.name().singular(), "DÓLAR");
        assert_eq!(CurrencyCode::Usd.name().plural(), "DÓLARES");
        assert_eq!(CurrencyCode::Eur.name().plural(), "EUROS");
        assert_eq!(CurrencyCode::Pen.name().plural(), "SOLES");
        assert_eq!(CurrencyCode::Brl.name().singular(), "REAL");
        assert_eq!(CurrencyCode::Clp.name(), CurrencyCode::Cop.name());
    }

    #[test]
    fn agrees_with_units() {
        let name = CurrencyCode::Pen.name();
        assert_eq!(name.for_units(0), "SOLES");
        assert_eq!(name.for_units(1), "SOL");
        assert_eq!(name.for_units(2), "SOLES");
        assert_eq!(name.for_units(1_000_001), "SOLES");
    }

    #[test]
    fn parses_strictly() {
        assert_eq!("EUR".parse::<CurrencyCode>(), Ok(CurrencyCode::Eur));
        assert_eq!("GBP".parse::<CurrencyCode>(), Err(Error::UnknownCurrency("GBP".into())));
        assert_eq!(CurrencyCode::Mxn.to_string(), "MXN");
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes_as_iso_code() {
        let ser = serde_json::to_string(&CurrencyCode::Usd).unwrap();
        assert_eq!(ser, r#""USD""#);
        let de: CurrencyCode = serde_json::from_str(r#""ARS""#).unwrap();
        assert_eq!(de, CurrencyCode::Ars);
        assert!(serde_json::from_str::<CurrencyCode>(r#""XYZ""#).is_err());
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes_names() {
        let ser = serde_json::to_string(CurrencyCode::Usd.name()).unwrap();
        assert_eq!(ser, r#"{"singular":"DÓLAR","plural":"DÓLARES"}"#);
    }
}
