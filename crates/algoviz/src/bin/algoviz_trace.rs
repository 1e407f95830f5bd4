//! `algoviz-trace` - run a scenario and print its step trace.
//!
//! Usage:
//!   algoviz-trace < scenario.json
//!
//! The scenario is read from stdin; the report is written to stdout as
//! pretty-printed JSON.

use algoviz::cli::trace_reader;
use std::io::{self, Write};

fn main() {
    match trace_reader(io::stdin().lock()) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
