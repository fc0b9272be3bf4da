//! Whitespace token reader
//!
//! This module reads a whole input record up front and hands it out as
//! whitespace-delimited tokens, parsed numbers, or raw lines.

use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

/// Input record errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input ended before a required token
    #[error("missing {expected}")]
    MissingToken { expected: &'static str },
    /// Token is not a valid number of the expected kind
    #[error("invalid {expected}: {token:?}")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },
    /// Token longer than the accepted bound
    #[error("token too long: at most {max} characters, found {found}")]
    TokenTooLong { max: usize, found: usize },
    /// Declared length does not match the actual text
    #[error("length mismatch: expected {expected} characters, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Cursor over one complete input record
#[derive(Clone, Debug)]
pub struct TokenReader {
    input: String,
    pos: usize,
}

impl TokenReader {
    /// Create a reader over already-loaded text
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
        }
    }

    /// Read `reader` to the end and wrap the text
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading fails or the input is not UTF-8.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, InputError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(Self::new(input))
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Next whitespace-delimited token
    pub fn next_token(&mut self, expected: &'static str) -> Result<&str, InputError> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return Err(InputError::MissingToken { expected });
        }

        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let start = self.pos;
        self.pos += len;
        Ok(&self.input[start..start + len])
    }

    /// Next token, rejected if longer than `max` characters
    pub fn next_bounded(&mut self, expected: &'static str, max: usize) -> Result<&str, InputError> {
        let token = self.next_token(expected)?;
        let found = token.chars().count();
        if found > max {
            return Err(InputError::TokenTooLong { max, found });
        }
        Ok(token)
    }

    /// Next token parsed as `T`
    pub fn next_parsed<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| InputError::InvalidNumber {
            token: token.to_owned(),
            expected,
        })
    }

    /// Rest of the current line, without the line terminator
    ///
    /// An empty line is a valid result; only the end of input is an error.
    pub fn next_line(&mut self, expected: &'static str) -> Result<&str, InputError> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return Err(InputError::MissingToken { expected });
        }

        let (line_len, consumed) = match rest.find('\n') {
            Some(newline) => (newline, newline + 1),
            None => (rest.len(), rest.len()),
        };
        let start = self.pos;
        self.pos += consumed;

        let line = &self.input[start..start + line_len];
        Ok(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Whether any non-whitespace input is left
    pub fn has_remaining(&self) -> bool {
        !self.input[self.pos..].trim_start().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_across_lines() {
        let mut reader = TokenReader::new("  3\n10 20\r\n\t30 ");
        assert_eq!(reader.next_token("t").unwrap(), "3");
        assert_eq!(reader.next_token("a").unwrap(), "10");
        assert_eq!(reader.next_token("b").unwrap(), "20");
        assert_eq!(reader.next_token("c").unwrap(), "30");
        assert!(!reader.has_remaining());
        assert_eq!(
            reader.next_token("d"),
            Err(InputError::MissingToken { expected: "d" })
        );
    }

    #[test]
    fn test_next_parsed() {
        let mut reader = TokenReader::new("-42 x 18446744073709551616");
        assert_eq!(reader.next_parsed::<i64>("n").unwrap(), -42);
        assert_eq!(
            reader.next_parsed::<i64>("k"),
            Err(InputError::InvalidNumber {
                token: "x".to_string(),
                expected: "k"
            })
        );
        assert!(matches!(
            reader.next_parsed::<u64>("amount"),
            Err(InputError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_next_bounded() {
        let mut reader = TokenReader::new("01 100");
        assert_eq!(reader.next_bounded("magnet", 2).unwrap(), "01");
        assert_eq!(
            reader.next_bounded("magnet", 2),
            Err(InputError::TokenTooLong { max: 2, found: 3 })
        );
    }

    #[test]
    fn test_next_line() {
        let mut reader = TokenReader::new("SANTA CLAUS\r\n\nDED");
        assert_eq!(reader.next_line("guest").unwrap(), "SANTA CLAUS");
        assert_eq!(reader.next_line("host").unwrap(), "");
        assert_eq!(reader.next_line("pile").unwrap(), "DED");
        assert!(matches!(
            reader.next_line("extra"),
            Err(InputError::MissingToken { .. })
        ));
    }

    #[test]
    fn test_from_reader() {
        let mut reader = TokenReader::from_reader("7 8".as_bytes()).unwrap();
        assert_eq!(reader.next_parsed::<u8>("a").unwrap(), 7);
        assert!(reader.has_remaining());
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0xff, 0xfe];
        assert!(matches!(
            TokenReader::from_reader(bytes),
            Err(InputError::Io(_))
        ));
    }
}
