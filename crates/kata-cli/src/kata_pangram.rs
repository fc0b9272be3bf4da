//! Pangram CLI
//!
//! Usage: kata_pangram < input.txt
//! Reads n, then a string of length n. Prints YES if every Latin letter
//! appears (case-insensitive), otherwise NO.
//!
//! Example:
//!   printf '35\nTheQuickBrownFoxJumpsOverTheLazyDog\n' | kata_pangram

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::Pangram) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
