//! Spells a single 0-999 group, the building block every larger number is
//! assembled from.
//!
//! Spanish numerals are irregular below one hundred: 10-19 have their own
//! names, 21-29 contract into a single word ("VEINTIUN"), and an exact
//! hundred is "CIEN" rather than "CIENTO". Each of these is its own branch.

use crate::error::{Error, Result};

static UNIDADES: [&str; 10] = ["", "UN", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE"];
static DECENAS: [&str; 10] = ["", "DIEZ", "VEINTE", "TREINTA", "CUARENTA", "CINCUENTA", "SESENTA", "SETENTA", "OCHENTA", "NOVENTA"];
static ESPECIALES: [&str; 10] = ["DIEZ", "ONCE", "DOCE", "TRECE", "CATORCE", "QUINCE", "DIECISÉIS", "DIECISIETE", "DIECIOCHO", "DIECINUEVE"];
static CENTENAS: [&str; 10] = ["", "CIENTO", "DOSCIENTOS", "TRESCIENTOS", "CUATROCIENTOS", "QUINIENTOS", "SEISCIENTOS", "SETECIENTOS", "OCHOCIENTOS", "NOVECIENTOS"];

/// Spell a group between 0 and 999.
///
/// Zero spells as the empty string: it only ever shows up as a missing
/// segment inside a larger number, and a whole amount of zero is handled by
/// the speller.
pub fn convert_group(n: u16) -> Result<String> {
    if n > 999 {
        Err(Error::GroupOutOfRange(n))?;
    }
    Ok(group_words(n))
}

/// Unchecked version of `convert_group` for callers that already split their
/// number into groups.
pub(crate) fn group_words(n: u16) -> String {
    if n == 100 {
        return "CIEN".into();
    }
    let c = (n / 100) as usize;
    let rest = (n % 100) as usize;
    let mut words = String::new();

    if c > 0 {
        words.push_str(CENTENAS[c]);
        if rest > 0 {
            words.push(' ');
        }
    }

    if rest >= 10 && rest < 20 {
        words.push_str(ESPECIALES[rest - 10]);
    } else {
        let d = rest / 10;
        let u = rest % 10;
        if d == 2 && u > 0 {
            words.push_str("VEINTI");
            words.push_str(UNIDADES[u]);
        } else if d > 0 {
            words.push_str(DECENAS[d]);
            if u > 0 {
                words.push_str(" Y ");
                words.push_str(UNIDADES[u]);
            }
        } else if u > 0 {
            words.push_str(UNIDADES[u]);
        }
    }
    words
}
