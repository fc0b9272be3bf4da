//! Kata-wide constants
//!
//! Note: input bounds are enforced by the reader and the digit-string parser,
//! never by the transforms themselves.

// =============================================================================
// Search bounds
// =============================================================================

/// Exclusive upper bound for both coordinates of the square pair search
pub const PAIR_SEARCH_BOUND: i64 = 100;

// =============================================================================
// Input bounds
// =============================================================================

/// Maximum accepted length of a numeric string
pub const MAX_DIGITS: usize = 1000;

/// Maximum accepted length of a single word (case normalization)
pub const MAX_WORD_LEN: usize = 100;

/// Maximum accepted length of a magnet token ("01" / "10")
pub const MAX_MAGNET_TOKEN_LEN: usize = 2;

// =============================================================================
// Alphabet
// =============================================================================

/// Number of letters in the Latin alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Digits counted as lucky
pub const LUCKY_DIGITS: [u8; 2] = [b'4', b'7'];

// =============================================================================
// Currency
// =============================================================================

/// Bill denominations, largest first
pub const BILL_DENOMINATIONS: [u64; 5] = [100, 20, 10, 5, 1];
