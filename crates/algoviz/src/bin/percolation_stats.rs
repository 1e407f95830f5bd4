//! `percolation-stats` - Monte Carlo estimate of the percolation threshold.
//!
//! Usage:
//!   percolation-stats <n> <trials> [seed]
//!
//! Runs `trials` independent simulations on an `n × n` grid and prints the
//! mean, standard deviation and 95% confidence interval of the threshold.

use algoviz::cli::{percolation_stats, StatsArgs};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = StatsArgs::parse(&args).and_then(percolation_stats);
    match result {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
