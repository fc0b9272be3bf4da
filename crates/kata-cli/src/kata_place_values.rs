//! Place values CLI
//!
//! Usage: kata_place_values < input.txt
//! Reads T, then T numbers. Prints, per number, the count of non-zero digits
//! and their place values.
//!
//! Example:
//!   printf '1\n102\n' | kata_place_values

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::PlaceValues) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
