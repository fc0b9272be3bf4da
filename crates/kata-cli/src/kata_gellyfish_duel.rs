//! Gellyfish duel CLI
//!
//! Usage: kata_gellyfish_duel < input.txt
//! Reads T, then T lines `a b c d`. Prints Gellyfish or Flower per line.
//!
//! Example:
//!   printf '1\n1 1 1 0\n' | kata_gellyfish_duel

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::GellyfishDuel) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
