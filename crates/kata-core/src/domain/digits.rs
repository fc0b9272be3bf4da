//! Decimal digit strings
//!
//! Validated numeric text plus the digit-wise transforms that operate on it:
//! borrow-free decrement and lucky digit counting.

use crate::constants::{LUCKY_DIGITS, MAX_DIGITS};
use thiserror::Error;

/// Digit string errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    /// No digits at all
    #[error("numeric string is empty")]
    Empty,
    /// A byte outside `0-9`
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
    /// Longer than the accepted bound
    #[error("numeric string too long: at most {max} digits, found {found}")]
    TooLong { max: usize, found: usize },
    /// Every digit was consumed before the requested number of steps
    #[error("numeric string exhausted at step {step}")]
    Exhausted { step: u64 },
}

/// Non-empty string of ASCII decimal digits
///
/// Leading zeros are kept as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Validate `text` as a digit string
    pub fn parse(text: &str) -> Result<Self, DigitError> {
        if text.is_empty() {
            return Err(DigitError::Empty);
        }
        if text.len() > MAX_DIGITS {
            return Err(DigitError::TooLong {
                max: MAX_DIGITS,
                found: text.len(),
            });
        }
        if let Some((position, found)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(DigitError::NonDigit { position, found });
        }
        Ok(Self(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a parsed digit string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply `steps` borrow-free decrements
    ///
    /// Each step drops a trailing `0`, or lowers the last digit by one.
    /// Dropping the final remaining digit is an error: the result must stay
    /// a digit string.
    pub fn decrement(&self, steps: u64) -> Result<DigitString, DigitError> {
        let mut digits = self.0.clone().into_bytes();

        for step in 1..=steps {
            if digits.last() == Some(&b'0') {
                digits.pop();
            } else if let Some(last) = digits.last_mut() {
                *last -= 1;
            }

            if digits.is_empty() {
                return Err(DigitError::Exhausted { step });
            }
        }

        // Only ASCII digits were touched, so the bytes are still valid UTF-8.
        Ok(DigitString(digits.into_iter().map(char::from).collect()))
    }

    /// Number of lucky digits (`4` or `7`)
    pub fn lucky_digit_count(&self) -> u64 {
        self.as_bytes()
            .iter()
            .filter(|b| LUCKY_DIGITS.contains(b))
            .count() as u64
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DigitString {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check whether the decimal form of `value` consists only of lucky digits
///
/// Zero is not lucky.
pub fn is_lucky_number(value: u64) -> bool {
    value
        .to_string()
        .bytes()
        .all(|b| LUCKY_DIGITS.contains(&b))
}

/// Check whether the count of lucky digits in `number` is itself lucky
pub fn is_nearly_lucky(number: &DigitString) -> bool {
    is_lucky_number(number.lucky_digit_count())
}
