//! Queue swap CLI
//!
//! Usage: kata_queue_swap < input.txt
//! Reads n t, then a queue of n `B`/`G` characters. Prints the queue after
//! t seconds of boys letting girls forward.
//!
//! Example:
//!   printf '5 1\nBGGBG\n' | kata_queue_swap

use kata_core::{Program, logging, run_stdio};

fn main() {
    logging::init();

    if let Err(e) = run_stdio(Program::QueueSwap) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
