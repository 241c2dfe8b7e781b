//! Spelling numbers as Spanish words.
//!
//! [group] handles a single 0-999 group and [speller] assembles groups, scale
//! words and the currency name into a full amount.

pub mod group;
pub mod speller;

pub use group::convert_group;
pub use speller::AmountSpeller;
