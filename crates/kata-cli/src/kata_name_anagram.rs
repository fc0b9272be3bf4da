//! Name anagram CLI
//!
//! Usage: kata_name_anagram < input.txt
//! Reads three lines: guest name, host name, letter pile. Prints YES if the
//! pile is exactly the letters of both names, otherwise NO.
//!
//! Example:
//!   printf 'SANTACLAUS\nDEDMOROZ\nSANTAMOROZDEDCLAUS\n' | kata_name_anagram

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::NameAnagram) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
