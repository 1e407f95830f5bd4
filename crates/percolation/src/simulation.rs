//! Caller-side drivers that decide which cell to open next.

use algoviz_util::Fuzzer;
use serde::Serialize;

use crate::grid::{OpenOutcome, Percolation};

/// Opens uniformly random blocked cells, one per call.
///
/// Backs an "open random cell" button or an auto-play loop; pacing is up to
/// whoever calls [`RandomOpener::open_random`].
#[derive(Debug, Clone)]
pub struct RandomOpener {
    fuzzer: Fuzzer,
}

impl RandomOpener {
    pub fn new(seed: u64) -> Self {
        Self::from_fuzzer(Fuzzer::from_u64(seed))
    }

    pub fn from_fuzzer(fuzzer: Fuzzer) -> Self {
        Self { fuzzer }
    }

    /// Opens one random blocked cell and returns its coordinates, or `None`
    /// once every cell is open.
    pub fn open_random(&mut self, grid: &mut Percolation) -> Option<(usize, usize)> {
        let blocked = grid.blocked_cells();
        if blocked.is_empty() {
            return None;
        }
        let (row, col) = *self.fuzzer.pick(&blocked);
        let outcome = grid.open(row, col);
        debug_assert_eq!(outcome, OpenOutcome::Opened);
        Some((row, col))
    }
}

/// Outcome of opening random cells until the grid percolates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRun {
    pub size: usize,
    /// Cells in the order they were opened.
    pub opened: Vec<(usize, usize)>,
    pub percolated: bool,
    /// Fraction of open cells at the moment of percolation.
    pub threshold: f64,
}

/// Opens cells of a fresh `n × n` grid in random order until it percolates.
///
/// # Panics
///
/// Panics if `n` exceeds [`Percolation::MAX_SIZE`].
pub fn simulate(n: usize, seed: u64) -> SimulationRun {
    run_with(n, &mut Fuzzer::from_u64(seed))
}

pub(crate) fn run_with(n: usize, fuzzer: &mut Fuzzer) -> SimulationRun {
    let mut grid = Percolation::new(n);
    let mut order: Vec<(usize, usize)> = (0..n * n).map(|i| (i / n, i % n)).collect();
    fuzzer.shuffle(&mut order);

    let mut opened = Vec::new();
    for (row, col) in order {
        if grid.percolates() {
            break;
        }
        grid.open(row, col);
        opened.push((row, col));
    }

    SimulationRun {
        size: n,
        opened,
        percolated: grid.percolates(),
        threshold: grid.open_fraction(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_opener_opens_every_cell_once() {
        let mut grid = Percolation::new(4);
        let mut opener = RandomOpener::new(11);
        let mut seen = Vec::new();
        while let Some(cell) = opener.open_random(&mut grid) {
            assert!(!seen.contains(&cell));
            seen.push(cell);
        }
        assert_eq!(seen.len(), 16);
        assert_eq!(grid.open_count(), 16);
        assert!(grid.percolates());
    }

    #[test]
    fn random_opener_is_reproducible() {
        let mut a = RandomOpener::new(5);
        let mut b = RandomOpener::new(5);
        let mut grid_a = Percolation::new(5);
        let mut grid_b = Percolation::new(5);
        for _ in 0..10 {
            assert_eq!(a.open_random(&mut grid_a), b.open_random(&mut grid_b));
        }
    }

    #[test]
    fn simulate_stops_at_percolation() {
        let run = simulate(6, 123);
        assert!(run.percolated);
        assert!(run.threshold > 0.0 && run.threshold <= 1.0);
        assert_eq!(
            run.threshold,
            run.opened.len() as f64 / 36.0
        );

        let mut grid = Percolation::new(6);
        let (last, before) = run.opened.split_last().unwrap();
        for &(r, c) in before {
            grid.open(r, c);
        }
        assert!(!grid.percolates());
        grid.open(last.0, last.1);
        assert!(grid.percolates());
    }

    #[test]
    fn simulate_empty_grid() {
        let run = simulate(0, 1);
        assert!(!run.percolated);
        assert!(run.opened.is_empty());
        assert_eq!(run.threshold, 0.0);
    }
}
