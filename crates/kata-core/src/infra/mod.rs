//! Infrastructure layer - Console input
//!
//! This module turns raw standard input into typed tokens.

pub mod token_reader;
