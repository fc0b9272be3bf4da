//! Per-program use cases
//!
//! Each solver reads one complete record from a `TokenReader`, applies the
//! matching domain transform and writes the answer in the exact format the
//! judge expects. Output formats differ on purpose: `magnet_groups` and
//! `word_case` print no trailing newline.

use crate::app::SolveError;
use crate::constants::{MAX_MAGNET_TOKEN_LEN, MAX_WORD_LEN};
use crate::domain::bills::count_bills;
use crate::domain::digits::{DigitString, is_nearly_lucky};
use crate::domain::duel::Duel;
use crate::domain::letters::{LetterSet, is_rearrangement};
use crate::domain::magnets::count_groups;
use crate::domain::parity::alternating_sum;
use crate::domain::place_value::place_values;
use crate::domain::queue::after_seconds;
use crate::domain::square_pair::find_square_pair;
use crate::domain::word_case::normalize_case;
use crate::infra::token_reader::{InputError, TokenReader};
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// Judge-style yes/no answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("YES"),
            Self::No => f.write_str("NO"),
        }
    }
}

fn next_digits(reader: &mut TokenReader, expected: &'static str) -> Result<DigitString, SolveError> {
    Ok(DigitString::parse(reader.next_token(expected)?)?)
}

/// Check that a declared length matches the byte length of the text after it
fn check_length(expected: usize, text: &str) -> Result<(), InputError> {
    let found = text.len();
    if found != expected {
        return Err(InputError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// `T`, then `T` targets: first `(i, j)` with `(i + j)^2 == n`, or `-1`
pub fn square_pair(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let cases: usize = reader.next_parsed("case count")?;
    debug!(cases, "square pair search");

    for case in 0..cases {
        let target: i64 = reader.next_parsed("target")?;
        match find_square_pair(target) {
            Some((i, j)) => writeln!(out, "{} {}", i, j)?,
            None => {
                trace!(case, target, "no pair within bound");
                writeln!(out, "-1")?;
            }
        }
    }
    Ok(())
}

/// `n k`: `n` after `k` borrow-free decrements
pub fn digit_decrement(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let number = next_digits(reader, "number")?;
    let steps: u64 = reader.next_parsed("step count")?;
    debug!(digits = number.len(), steps, "digit decrement");

    writeln!(out, "{}", number.decrement(steps)?)?;
    Ok(())
}

/// `n`: is the count of lucky digits itself lucky
pub fn lucky_count(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let number = next_digits(reader, "number")?;
    debug!(
        digits = number.len(),
        lucky = number.lucky_digit_count(),
        "lucky count"
    );

    writeln!(out, "{}", Verdict::from(is_nearly_lucky(&number)))?;
    Ok(())
}

/// `T`, then `T` lines `a b c d`: duel winner per line
pub fn gellyfish_duel(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let cases: usize = reader.next_parsed("case count")?;
    debug!(cases, "gellyfish duel");

    for _ in 0..cases {
        let duel = Duel::new(
            reader.next_parsed("a")?,
            reader.next_parsed("b")?,
            reader.next_parsed("c")?,
            reader.next_parsed("d")?,
        );
        trace!(?duel, remaining = ?duel.remaining(), "duel");
        writeln!(out, "{}", duel.winner())?;
    }
    Ok(())
}

/// `n`: alternating sum up to `n`
pub fn parity_sum(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let n: i64 = reader.next_parsed("n")?;
    debug!(n, "parity sum");

    writeln!(out, "{}", alternating_sum(n))?;
    Ok(())
}

/// `n`, then a string of length `n`: does it contain every letter
pub fn pangram(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let len: usize = reader.next_parsed("length")?;
    let text = reader.next_token("text")?;
    check_length(len, text)?;

    let letters = LetterSet::from_text(text);
    debug!(len, distinct = letters.len(), "pangram");
    trace!(missing = %letters.missing().collect::<String>(), "unseen letters");

    writeln!(out, "{}", Verdict::from(letters.is_complete()))?;
    Ok(())
}

/// `n`, then `n` magnet tokens: number of groups, no trailing newline
pub fn magnet_groups(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let count: usize = reader.next_parsed("magnet count")?;
    let magnets = (0..count)
        .map(|_| {
            reader
                .next_bounded("magnet", MAX_MAGNET_TOKEN_LEN)
                .map(str::to_owned)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let groups = count_groups(&magnets);
    debug!(count, groups, "magnet groups");

    write!(out, "{}", groups)?;
    Ok(())
}

/// `T`, then `T` numbers: count of non-zero place values, then the values
///
/// The value line is joined with single spaces and has no trailing space,
/// unlike the `"%d "`-per-value layout judges also accept; a number with no
/// non-zero digit prints an empty value line.
pub fn place_values_of(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let cases: usize = reader.next_parsed("case count")?;
    debug!(cases, "place values");

    for _ in 0..cases {
        let number = next_digits(reader, "number")?;
        let values = place_values(&number);

        let line = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", values.len())?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// One word: rewritten in its majority case, no trailing newline
pub fn word_case(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let word = reader.next_bounded("word", MAX_WORD_LEN)?;
    debug!(len = word.len(), "word case");

    write!(out, "{}", normalize_case(word))?;
    Ok(())
}

/// `n t`, then a queue of `n` children: arrangement after `t` seconds
pub fn queue_swap(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let len: usize = reader.next_parsed("queue length")?;
    let seconds: u64 = reader.next_parsed("seconds")?;
    let queue = reader.next_token("queue")?;
    check_length(len, queue)?;
    debug!(len, seconds, "queue swap");

    writeln!(out, "{}", after_seconds(queue, seconds))?;
    Ok(())
}

/// `amount`: minimum number of bills
pub fn bill_count(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let amount: u64 = reader.next_parsed("amount")?;
    debug!(amount, "bill count");

    writeln!(out, "Total bills used: {}", count_bills(amount))?;
    Ok(())
}

/// Three lines: can the first two be rearranged into the third
pub fn name_anagram(reader: &mut TokenReader, out: &mut impl Write) -> Result<(), SolveError> {
    let guest = reader.next_line("guest name")?.to_owned();
    let host = reader.next_line("host name")?.to_owned();
    let pile = reader.next_line("letter pile")?;
    debug!(
        guest = guest.len(),
        host = host.len(),
        pile = pile.len(),
        "name anagram"
    );

    writeln!(out, "{}", Verdict::from(is_rearrangement(&guest, &host, pile)))?;
    Ok(())
}
