//! Utilities for building the decimal amounts fed to the speller.

/// Create a decimal amount.
///
/// A thin wrapper around `rust_decimal_macros::dec!` so callers (and our
/// tests) can write invoice totals as literals without losing the cents to
/// floating point, ie `decimal_to_words(num!(4.995), "COP")`.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
