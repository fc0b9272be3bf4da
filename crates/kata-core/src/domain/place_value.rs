//! Decomposition of a number into non-zero place values
//!
//! `102` becomes `100 + 2`. Values are kept symbolic (digit and exponent)
//! and rendered as text, so arbitrarily long digit strings decompose exactly.

use crate::domain::digits::DigitString;
use std::fmt;

/// A non-zero digit at a decimal position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceValue {
    /// Digit value (1-9)
    pub digit: u8,
    /// Position from the right, 0-indexed
    pub exponent: usize,
}

impl fmt::Display for PlaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit)?;
        for _ in 0..self.exponent {
            f.write_str("0")?;
        }
        Ok(())
    }
}

/// Place values of every non-zero digit, most significant first
pub fn place_values(number: &DigitString) -> Vec<PlaceValue> {
    let len = number.len();
    number
        .as_bytes()
        .iter()
        .enumerate()
        .filter(|(_, b)| **b != b'0')
        .map(|(i, b)| PlaceValue {
            digit: b - b'0',
            exponent: len - 1 - i,
        })
        .collect()
}
