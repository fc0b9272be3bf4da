//! kata-core - Console kata solvers
//!
//! This crate provides:
//! - Pure transforms for each kata (`domain`)
//! - A whitespace token reader over standard input (`infra`)
//! - Per-program use cases wiring reader, transform and writer (`app`)

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;
pub mod logging;

// Re-export commonly used types
pub use app::program::{Program, run_stdio};
pub use app::SolveError;
pub use constants::*;
pub use domain::digits::{DigitError, DigitString};
pub use infra::token_reader::{InputError, TokenReader};
