//! Percolation on an `n × n` grid.
//!
//! [`Percolation`] is purely reactive: it opens exactly the cells it is told
//! to open and answers whether an open path joins the top row to the bottom
//! row. Choosing which cell to open next is the caller's business; the
//! [`simulation`] and [`stats`] modules are such callers.
//!
//! ```
//! use algoviz_percolation::{OpenOutcome, Percolation};
//!
//! let mut grid = Percolation::new(2);
//! assert_eq!(grid.open(0, 0), OpenOutcome::Opened);
//! assert!(!grid.percolates());
//! assert_eq!(grid.open(1, 0), OpenOutcome::Opened);
//! assert!(grid.percolates());
//! assert_eq!(grid.open(1, 0), OpenOutcome::AlreadyOpen);
//! ```

pub mod grid;
pub mod simulation;
pub mod stats;

pub use grid::{CellState, GridError, OpenOutcome, Percolation};
pub use simulation::{simulate, RandomOpener, SimulationRun};
pub use stats::{PercolationStats, StatsError};
