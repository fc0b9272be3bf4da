//! Program registry
//!
//! Names every kata, maps names to solvers, and runs a solver over any
//! reader/writer pair (standard streams in the binaries, buffers in tests).

use crate::app::SolveError;
use crate::app::solvers;
use crate::infra::token_reader::TokenReader;
use std::fmt;
use std::io::{self, BufWriter, Read, Write};
use tracing::{debug, warn};

/// One console kata
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Program {
    SquarePair,
    DigitDecrement,
    LuckyCount,
    GellyfishDuel,
    ParitySum,
    Pangram,
    MagnetGroups,
    PlaceValues,
    WordCase,
    QueueSwap,
    BillCount,
    NameAnagram,
}

impl Program {
    /// Every program, in listing order
    pub const ALL: [Program; 12] = [
        Program::SquarePair,
        Program::DigitDecrement,
        Program::LuckyCount,
        Program::GellyfishDuel,
        Program::ParitySum,
        Program::Pangram,
        Program::MagnetGroups,
        Program::PlaceValues,
        Program::WordCase,
        Program::QueueSwap,
        Program::BillCount,
        Program::NameAnagram,
    ];

    /// Command-line name (`square-pair`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Self::SquarePair => "square-pair",
            Self::DigitDecrement => "digit-decrement",
            Self::LuckyCount => "lucky-count",
            Self::GellyfishDuel => "gellyfish-duel",
            Self::ParitySum => "parity-sum",
            Self::Pangram => "pangram",
            Self::MagnetGroups => "magnet-groups",
            Self::PlaceValues => "place-values",
            Self::WordCase => "word-case",
            Self::QueueSwap => "queue-swap",
            Self::BillCount => "bill-count",
            Self::NameAnagram => "name-anagram",
        }
    }

    /// One-line summary for usage output
    pub fn summary(self) -> &'static str {
        match self {
            Self::SquarePair => "first (i, j) below 100 with (i + j)^2 = n, per case",
            Self::DigitDecrement => "apply k borrow-free decrements to a digit string",
            Self::LuckyCount => "is the number of 4/7 digits itself a lucky number",
            Self::GellyfishDuel => "duel winner from a b c d, per case",
            Self::ParitySum => "alternating sum -1 + 2 - 3 + ... up to n",
            Self::Pangram => "does a string contain every Latin letter",
            Self::MagnetGroups => "number of runs of equal adjacent magnets",
            Self::PlaceValues => "non-zero place values of a number, per case",
            Self::WordCase => "rewrite a word in its majority letter case",
            Self::QueueSwap => "queue of boys and girls after t seconds",
            Self::BillCount => "minimum bills of 100/20/10/5/1 for an amount",
            Self::NameAnagram => "can two names be rearranged into a letter pile",
        }
    }

    /// Look a program up by its command-line name
    ///
    /// Underscores are accepted in place of dashes.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|p| p.name() == normalized)
    }

    /// Solve one record from `input`, writing the answer to `output`
    ///
    /// # Errors
    ///
    /// Returns `SolveError` for malformed input or failed writes. Output
    /// already written for earlier cases is kept.
    pub fn run(self, input: impl Read, output: &mut impl Write) -> Result<(), SolveError> {
        let mut reader = TokenReader::from_reader(input)?;
        debug!(program = self.name(), "solving");

        match self {
            Self::SquarePair => solvers::square_pair(&mut reader, output)?,
            Self::DigitDecrement => solvers::digit_decrement(&mut reader, output)?,
            Self::LuckyCount => solvers::lucky_count(&mut reader, output)?,
            Self::GellyfishDuel => solvers::gellyfish_duel(&mut reader, output)?,
            Self::ParitySum => solvers::parity_sum(&mut reader, output)?,
            Self::Pangram => solvers::pangram(&mut reader, output)?,
            Self::MagnetGroups => solvers::magnet_groups(&mut reader, output)?,
            Self::PlaceValues => solvers::place_values_of(&mut reader, output)?,
            Self::WordCase => solvers::word_case(&mut reader, output)?,
            Self::QueueSwap => solvers::queue_swap(&mut reader, output)?,
            Self::BillCount => solvers::bill_count(&mut reader, output)?,
            Self::NameAnagram => solvers::name_anagram(&mut reader, output)?,
        }

        if reader.has_remaining() {
            warn!(program = self.name(), "ignoring trailing input");
        }

        output.flush()?;
        Ok(())
    }

    /// Solve `input` held in memory and return the exact output text
    pub fn run_to_string(self, input: &str) -> Result<String, SolveError> {
        let mut output = Vec::new();
        self.run(input.as_bytes(), &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `program` over standard input and standard output
pub fn run_stdio(program: Program) -> Result<(), SolveError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    program.run(stdin.lock(), &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_round_trip() {
        for program in Program::ALL {
            assert_eq!(Program::from_name(program.name()), Some(program));
        }
        let mut names: Vec<_> = Program::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Program::ALL.len());
    }

    #[test]
    fn test_from_name_accepts_underscores() {
        assert_eq!(Program::from_name("square_pair"), Some(Program::SquarePair));
        assert_eq!(Program::from_name("Word-Case"), Some(Program::WordCase));
        assert_eq!(Program::from_name("unknown"), None);
    }

    #[test]
    fn test_run_to_string() {
        assert_eq!(Program::ParitySum.run_to_string("5\n").unwrap(), "-3\n");
    }

    #[test]
    fn test_run_ignores_trailing_input() {
        assert_eq!(Program::ParitySum.run_to_string("4 99\n").unwrap(), "2\n");
    }
}
