//! Error types for the amount speller.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("amount must be a finite number")]
    NonFiniteAmount,
    #[error("amount exceeds the largest amount that can be spelled")]
    AmountOutOfRange,
    #[error("group value {0} is not in the range 0-999")]
    GroupOutOfRange(u16),
    #[error("cents value {0} is not in the range 0-99")]
    CentsOutOfRange(u8),
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

pub type Result<T> = std::result::Result<T, Error>;
