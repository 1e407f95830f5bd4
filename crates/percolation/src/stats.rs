//! Monte Carlo estimate of the percolation threshold.

use algoviz_util::Fuzzer;
use serde::Serialize;
use thiserror::Error;

use crate::grid::{GridError, Percolation};
use crate::simulation::run_with;

/// z-score of a two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("at least one trial is required")]
    NoTrials,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Thresholds observed over independent random trials on `size × size` grids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercolationStats {
    pub size: usize,
    pub thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` simulations. The whole batch is reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyGrid`] for `n == 0`, [`StatsError::NoTrials`] for
    /// `trials == 0`, [`StatsError::Grid`] for `n` above
    /// [`Percolation::MAX_SIZE`].
    pub fn run(n: usize, trials: usize, seed: u64) -> Result<Self, StatsError> {
        if n == 0 {
            return Err(StatsError::EmptyGrid);
        }
        if n > Percolation::MAX_SIZE {
            return Err(GridError::TooLarge {
                size: n,
                max: Percolation::MAX_SIZE,
            }
            .into());
        }
        if trials == 0 {
            return Err(StatsError::NoTrials);
        }

        let mut fuzzer = Fuzzer::from_u64(seed);
        let thresholds = (0..trials)
            .map(|_| run_with(n, &mut fuzzer).threshold)
            .collect();
        Ok(Self {
            size: n,
            thresholds,
        })
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation. `0.0` for a single trial.
    pub fn stddev(&self) -> f64 {
        let t = self.thresholds.len();
        if t < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let var = self
            .thresholds
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / (t - 1) as f64;
        var.sqrt()
    }

    fn margin(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.margin()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.margin()
    }
}
