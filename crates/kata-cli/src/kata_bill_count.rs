//! Bill count CLI
//!
//! Usage: kata_bill_count < input.txt
//! Reads an amount. Prints the minimum number of 100/20/10/5/1 bills.
//!
//! Example:
//!   echo 125 | kata_bill_count

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::BillCount) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
