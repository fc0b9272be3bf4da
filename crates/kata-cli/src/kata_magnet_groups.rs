//! Magnet groups CLI
//!
//! Usage: kata_magnet_groups < input.txt
//! Reads n, then n magnet tokens. Prints the number of groups with no
//! trailing newline.
//!
//! Example:
//!   printf '3\n10\n10\n01\n' | kata_magnet_groups

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::MagnetGroups) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
