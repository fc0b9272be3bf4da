//! Word case CLI
//!
//! Usage: kata_word_case < input.txt
//! Reads one word. Prints it in its majority letter case with no trailing
//! newline; ties go to lowercase.
//!
//! Example:
//!   echo HoUse | kata_word_case

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::WordCase) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
