//! Command-line drivers for the engines.
//!
//! Provides the core logic used by the binary entry points:
//! - `algoviz-trace`     runs a JSON [`Scenario`] and prints its step trace
//! - `percolation-stats` estimates the percolation threshold
//!
//! A scenario is a JSON object tagged by `engine`:
//!
//! ```json
//! {"engine": "heap", "kind": "min", "insert": [5, 3, 8], "extract": 1}
//! {"engine": "red_black", "insert": [10, 20, 30], "search": [20, 25]}
//! {"engine": "percolation", "size": 3, "open": [[0, 1], [1, 1], [2, 1]]}
//! {"engine": "union_find", "size": 4, "union": [[0, 1]], "connected": [[1, 0]]}
//! ```

use algoviz_heap::{Heap, HeapKind, HeapStep};
use std::io::Read;

use algoviz_percolation::{CellState, OpenOutcome, Percolation, PercolationStats, StatsError};
use algoviz_red_black::{InsertTrace, RbTree, SearchTrace, TreeStats};
use algoviz_union_find::{UnionFind, UnionFindError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seed used by `percolation-stats` when none is given.
pub const DEFAULT_SEED: u64 = 0x5eed;

/// Largest union-find accepted from a scenario.
pub const MAX_UNION_FIND_SIZE: usize = 1 << 24;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error("{0}")]
    Usage(String),
}

// ── Scenarios ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum Scenario {
    Heap {
        #[serde(default)]
        kind: HeapKind,
        #[serde(default)]
        insert: Vec<i64>,
        /// Number of root extractions after all inserts.
        #[serde(default)]
        extract: usize,
    },
    RedBlack {
        #[serde(default)]
        insert: Vec<i64>,
        #[serde(default)]
        search: Vec<i64>,
    },
    Percolation {
        size: usize,
        #[serde(default)]
        open: Vec<(usize, usize)>,
    },
    UnionFind {
        size: usize,
        #[serde(default)]
        union: Vec<(usize, usize)>,
        #[serde(default)]
        connected: Vec<(usize, usize)>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeapReport {
    pub kind: HeapKind,
    pub inserts: Vec<Vec<HeapStep<i64>>>,
    pub extracts: Vec<Vec<HeapStep<i64>>>,
    pub heap: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedBlackReport {
    pub inserts: Vec<InsertTrace<i64>>,
    pub searches: Vec<SearchTrace<i64>>,
    pub stats: TreeStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenEvent {
    pub row: usize,
    pub col: usize,
    pub outcome: OpenOutcome,
    pub open_count: usize,
    pub percolates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercolationReport {
    pub size: usize,
    pub events: Vec<OpenEvent>,
    pub grid: Vec<Vec<CellState>>,
    pub percolates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionEvent {
    pub a: usize,
    pub b: usize,
    /// `false` when `a` and `b` were already in one set.
    pub merged: bool,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionFindReport {
    pub size: usize,
    pub unions: Vec<UnionEvent>,
    pub connected: Vec<bool>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum Report {
    Heap(HeapReport),
    RedBlack(RedBlackReport),
    Percolation(PercolationReport),
    UnionFind(UnionFindReport),
}

pub fn run_heap(kind: HeapKind, insert: &[i64], extract: usize) -> HeapReport {
    let mut heap = Heap::new(kind);
    let inserts = insert
        .iter()
        .map(|&v| heap.insert(v).collect::<Vec<_>>())
        .collect();
    let extracts = (0..extract)
        .map(|_| heap.extract_root().collect::<Vec<_>>())
        .collect();
    HeapReport {
        kind,
        inserts,
        extracts,
        heap: heap.as_slice().to_vec(),
    }
}

pub fn run_red_black(insert: &[i64], search: &[i64]) -> RedBlackReport {
    let mut tree = RbTree::new();
    let inserts = insert.iter().map(|&k| tree.insert(k)).collect();
    let searches = search.iter().map(|k| tree.search(k)).collect();
    RedBlackReport {
        inserts,
        searches,
        stats: tree.stats(),
    }
}

/// # Errors
///
/// [`CliError::Usage`] when `size` exceeds [`Percolation::MAX_SIZE`].
pub fn run_percolation(
    size: usize,
    open: &[(usize, usize)],
) -> Result<PercolationReport, CliError> {
    let mut grid = Percolation::try_new(size).map_err(|e| CliError::Usage(e.to_string()))?;
    let events = open
        .iter()
        .map(|&(row, col)| {
            let outcome = grid.open(row, col);
            OpenEvent {
                row,
                col,
                outcome,
                open_count: grid.open_count(),
                percolates: grid.percolates(),
            }
        })
        .collect();
    Ok(PercolationReport {
        size,
        events,
        grid: grid.grid(),
        percolates: grid.percolates(),
    })
}

/// # Errors
///
/// [`CliError::Usage`] when `size` exceeds [`MAX_UNION_FIND_SIZE`];
/// [`CliError::UnionFind`] when a pair names an element outside `0..size`.
pub fn run_union_find(
    size: usize,
    union: &[(usize, usize)],
    connected: &[(usize, usize)],
) -> Result<UnionFindReport, CliError> {
    if size > MAX_UNION_FIND_SIZE {
        return Err(CliError::Usage(format!(
            "union-find size {size} exceeds the maximum of {MAX_UNION_FIND_SIZE}"
        )));
    }
    let mut uf = UnionFind::new(size);
    let mut unions = Vec::with_capacity(union.len());
    for &(a, b) in union {
        let merged = uf.try_union(a, b)?;
        unions.push(UnionEvent {
            a,
            b,
            merged,
            count: uf.count(),
        });
    }
    let connected = connected
        .iter()
        .map(|&(a, b)| uf.try_connected(a, b))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(UnionFindReport {
        size,
        unions,
        connected,
        count: uf.count(),
    })
}

pub fn run(scenario: &Scenario) -> Result<Report, CliError> {
    Ok(match scenario {
        Scenario::Heap {
            kind,
            insert,
            extract,
        } => Report::Heap(run_heap(*kind, insert, *extract)),
        Scenario::RedBlack { insert, search } => Report::RedBlack(run_red_black(insert, search)),
        Scenario::Percolation { size, open } => Report::Percolation(run_percolation(*size, open)?),
        Scenario::UnionFind {
            size,
            union,
            connected,
        } => Report::UnionFind(run_union_find(*size, union, connected)?),
    })
}

/// Parses a scenario and returns its report as pretty-printed JSON.
pub fn trace_json(input: &str) -> Result<String, CliError> {
    let scenario: Scenario = serde_json::from_str(input)?;
    let report = run(&scenario)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Reads a whole scenario from `reader` and traces it.
pub fn trace_reader(mut reader: impl Read) -> Result<String, CliError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    trace_json(buf.trim())
}

// ── percolation-stats ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsArgs {
    pub n: usize,
    pub trials: usize,
    pub seed: u64,
}

impl StatsArgs {
    /// Parses `<n> <trials> [seed]`, program name excluded.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let usage = || CliError::Usage("usage: percolation-stats <n> <trials> [seed]".to_string());
        let number = |name: &str, raw: &str| {
            raw.parse::<u64>().map_err(|_| {
                CliError::Usage(format!("{name} must be a non-negative integer, got {raw:?}"))
            })
        };
        let count = |name: &str, raw: &str| {
            usize::try_from(number(name, raw)?)
                .map_err(|_| CliError::Usage(format!("{name} is too large, got {raw:?}")))
        };
        let (n, trials) = match args {
            [n, trials] | [n, trials, _] => (count("n", n)?, count("trials", trials)?),
            _ => return Err(usage()),
        };
        if n > Percolation::MAX_SIZE {
            return Err(CliError::Usage(format!(
                "n must be at most {}, got {n}",
                Percolation::MAX_SIZE
            )));
        }
        let seed = match args.get(2) {
            Some(seed) => number("seed", seed)?,
            None => DEFAULT_SEED,
        };
        Ok(Self { n, trials, seed })
    }
}

/// Runs the trials and formats the summary.
pub fn percolation_stats(args: StatsArgs) -> Result<String, CliError> {
    let stats = PercolationStats::run(args.n, args.trials, args.seed)?;
    Ok(format!(
        "mean                    = {}\nstddev                  = {}\n95% confidence interval = [{}, {}]",
        stats.mean(),
        stats.stddev(),
        stats.confidence_lo(),
        stats.confidence_hi(),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────
