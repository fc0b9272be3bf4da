//! Lucky count CLI
//!
//! Usage: kata_lucky_count < input.txt
//! Reads a digit string. Prints YES if the number of 4/7 digits is itself
//! made only of 4s and 7s, otherwise NO.
//!
//! Example:
//!   echo 40047 | kata_lucky_count

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::LuckyCount) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
