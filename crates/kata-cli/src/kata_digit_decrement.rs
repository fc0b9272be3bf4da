//! Digit decrement CLI
//!
//! Usage: kata_digit_decrement < input.txt
//! Reads a digit string n and a step count k. Each step drops a trailing
//! zero or lowers the last digit by one.
//!
//! Example:
//!   echo '512 4' | kata_digit_decrement

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::DigitDecrement) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
