//! Square pair search CLI
//!
//! Usage: kata_square_pair < input.txt
//! Reads T, then T integers n. Prints the first pair (i, j) below 100
//! with (i + j)^2 = n, or -1.
//!
//! Example:
//!   printf '2\n16\n2\n' | kata_square_pair

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::SquarePair) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
