//! Parity sum CLI
//!
//! Usage: kata_parity_sum < input.txt
//! Reads n. Prints -1 + 2 - 3 + ... + (-1)^n n.
//!
//! Example:
//!   echo 5 | kata_parity_sum

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::ParitySum) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
