//! Kata dispatcher CLI
//!
//! Usage: kata <program> [options]
//!
//! Options:
//!   --list, -l   List available programs
//!   --help, -h   Show help
//!
//! Example: echo 5 | kata parity-sum

use kata_core::{Program, logging, run_stdio};
use std::env;

enum Command {
    Run(Program),
    List,
    Help,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <program> [options]", program);
    eprintln!();
    eprintln!("Reads one record from standard input and prints the answer.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --list, -l   List available programs");
    eprintln!("  --help, -h   Show this help message");
    eprintln!();
    eprintln!("Programs:");
    for p in Program::ALL {
        eprintln!("  {:<16} {}", p.name(), p.summary());
    }
}

fn parse_args() -> Result<Command, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut program: Option<Program> = None;

    for arg in &args {
        match arg.as_str() {
            "--list" | "-l" => return Ok(Command::List),
            "--help" | "-h" => return Ok(Command::Help),
            name if !name.starts_with('-') => {
                if program.is_some() {
                    return Err(format!("Unexpected argument: {}", name));
                }
                program =
                    Some(Program::from_name(name).ok_or_else(|| format!("Unknown program: {}", name))?);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    program
        .map(Command::Run)
        .ok_or_else(|| "Missing program argument".to_string())
}

fn main() {
    let program_name = env::args().next().unwrap_or_else(|| "kata".to_string());

    let command = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&program_name);
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => print_usage(&program_name),
        Command::List => {
            for p in Program::ALL {
                println!("{}", p.name());
            }
        }
        Command::Run(program) => {
            logging::init();

            if let Err(e) = run_stdio(program) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
