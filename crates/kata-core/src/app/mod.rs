//! Application layer - Use case implementations
//!
//! This module wires the token reader, the domain transforms and the output
//! formatting together, one use case per program.

pub mod program;
pub mod solvers;

use crate::domain::digits::DigitError;
use crate::infra::token_reader::InputError;
use thiserror::Error;

/// Errors raised while solving one input record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Malformed or missing input
    #[error(transparent)]
    Input(#[from] InputError),
    /// Invalid numeric string, or a digit transform that ran out of digits
    #[error(transparent)]
    Digits(#[from] DigitError),
    /// Writing the answer failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SolveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
