use algoviz_union_find::UnionFind;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {size} exceeds the maximum of {max}")]
    TooLarge { size: usize, max: usize },
}

/// Result of [`Percolation::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenOutcome {
    Opened,
    /// No-op: the cell was open already.
    AlreadyOpen,
    /// No-op: the coordinates are outside the grid.
    OutOfRange,
}

/// How a renderer should paint a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Blocked,
    Open,
    /// Open and connected to the top row.
    Full,
}

/// An `n × n` grid of blocked/open cells.
///
/// Connectivity lives in a union-find of `n*n + 2` elements: one per cell
/// plus a virtual top node (`n*n`) joined to every open cell of row 0 and a
/// virtual bottom node (`n*n + 1`) joined to every open cell of row `n-1`.
/// The grid percolates once the two virtual nodes share a set.
///
/// A second union-find without the bottom node answers [`Percolation::is_full`],
/// so that bottom-row cells are not reported full merely because some other
/// column already percolates.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    uf: UnionFind,
    full: UnionFind,
}

impl Percolation {
    /// Largest accepted side length.
    pub const MAX_SIZE: usize = 1 << 12;

    /// All-blocked grid of side `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Percolation::MAX_SIZE`]. Use
    /// [`Percolation::try_new`] for untrusted sizes.
    pub fn new(n: usize) -> Self {
        match Self::try_new(n) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    /// All-blocked grid of side `n`, or [`GridError::TooLarge`].
    pub fn try_new(n: usize) -> Result<Self, GridError> {
        let too_large = GridError::TooLarge {
            size: n,
            max: Self::MAX_SIZE,
        };
        if n > Self::MAX_SIZE {
            return Err(too_large);
        }
        let cells = n.checked_mul(n).ok_or_else(|| too_large.clone())?;
        let with_virtual = cells.checked_add(2).ok_or(too_large)?;
        Ok(Self {
            n,
            open: vec![false; cells],
            open_count: 0,
            uf: UnionFind::new(with_virtual),
            full: UnionFind::new(with_virtual - 1),
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    #[inline]
    fn top(&self) -> usize {
        self.n * self.n
    }

    #[inline]
    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.n && col < self.n).then(|| row * self.n + col)
    }

    /// Opens the cell at (`row`, `col`).
    ///
    /// Out-of-range coordinates and already-open cells are ignored and
    /// reported through the returned [`OpenOutcome`].
    pub fn open(&mut self, row: usize, col: usize) -> OpenOutcome {
        let Some(idx) = self.index(row, col) else {
            return OpenOutcome::OutOfRange;
        };
        if self.open[idx] {
            return OpenOutcome::AlreadyOpen;
        }
        self.open[idx] = true;
        self.open_count += 1;

        if row == 0 {
            let top = self.top();
            self.uf.union(idx, top);
            self.full.union(idx, top);
        }
        if row == self.n - 1 {
            let bottom = self.bottom();
            self.uf.union(idx, bottom);
        }

        let neighbours = [
            row.checked_sub(1).map(|r| (r, col)),
            Some((row + 1, col)),
            col.checked_sub(1).map(|c| (row, c)),
            Some((row, col + 1)),
        ];
        for (r, c) in neighbours.into_iter().flatten() {
            if let Some(other) = self.index(r, c) {
                if self.open[other] {
                    self.uf.union(idx, other);
                    self.full.union(idx, other);
                }
            }
        }

        OpenOutcome::Opened
    }

    /// `false` for blocked cells and for coordinates outside the grid.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|idx| self.open[idx])
    }

    /// Whether the cell is open and joined to the top row by open cells.
    pub fn is_full(&mut self, row: usize, col: usize) -> bool {
        let Some(idx) = self.index(row, col) else {
            return false;
        };
        let top = self.top();
        self.open[idx] && self.full.connected(idx, top)
    }

    /// Whether an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.top(), self.bottom());
        self.uf.connected(top, bottom)
    }

    /// Fraction of cells that are open. `0.0` for an empty grid.
    pub fn open_fraction(&self) -> f64 {
        if self.open.is_empty() {
            0.0
        } else {
            self.open_count as f64 / self.open.len() as f64
        }
    }

    /// Coordinates of every blocked cell in row-major order.
    pub fn blocked_cells(&self) -> Vec<(usize, usize)> {
        self.open
            .iter()
            .enumerate()
            .filter(|(_, open)| !**open)
            .map(|(idx, _)| (idx / self.n, idx % self.n))
            .collect()
    }

    /// Row-major snapshot of every cell's state.
    pub fn grid(&mut self) -> Vec<Vec<CellState>> {
        let n = self.n;
        let mut rows = Vec::with_capacity(n);
        for row in 0..n {
            let mut cells = Vec::with_capacity(n);
            for col in 0..n {
                let state = if self.is_full(row, col) {
                    CellState::Full
                } else if self.is_open(row, col) {
                    CellState::Open
                } else {
                    CellState::Blocked
                };
                cells.push(state);
            }
            rows.push(cells);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_blocked() {
        let mut grid = Percolation::new(3);
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.open_count(), 0);
        for row in 0..3 {
            for col in 0..3 {
                assert!(!grid.is_open(row, col));
                assert!(!grid.is_full(row, col));
            }
        }
        assert!(!grid.percolates());
        assert_eq!(grid.blocked_cells().len(), 9);
    }

    #[test]
    fn single_cell_grid_percolates_after_one_open() {
        let mut grid = Percolation::new(1);
        assert!(!grid.percolates());
        assert_eq!(grid.open(0, 0), OpenOutcome::Opened);
        assert!(grid.percolates());
        assert!(grid.is_full(0, 0));
    }

    #[test]
    fn empty_grid_never_percolates() {
        let mut grid = Percolation::new(0);
        assert_eq!(grid.open(0, 0), OpenOutcome::OutOfRange);
        assert!(!grid.percolates());
        assert_eq!(grid.open_fraction(), 0.0);
        assert!(grid.grid().is_empty());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let max = Percolation::MAX_SIZE;
        assert!(Percolation::try_new(max).is_ok());
        assert_eq!(
            Percolation::try_new(max + 1).err(),
            Some(GridError::TooLarge {
                size: max + 1,
                max
            })
        );
        assert!(matches!(
            Percolation::try_new(usize::MAX),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum")]
    fn new_panics_on_oversized_grid() {
        Percolation::new(5_000_000_000);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut grid = Percolation::new(2);
        assert_eq!(grid.open(2, 0), OpenOutcome::OutOfRange);
        assert_eq!(grid.open(0, 5), OpenOutcome::OutOfRange);
        assert!(!grid.is_open(2, 0));
        assert!(!grid.is_full(9, 9));
        assert_eq!(grid.open_count(), 0);
    }

    #[test]
    fn reopening_is_idempotent() {
        let mut grid = Percolation::new(2);
        assert_eq!(grid.open(0, 1), OpenOutcome::Opened);
        assert_eq!(grid.open(0, 1), OpenOutcome::AlreadyOpen);
        assert_eq!(grid.open_count(), 1);
    }

    #[test]
    fn two_by_two_row_does_not_percolate() {
        let mut grid = Percolation::new(2);
        grid.open(0, 0);
        grid.open(0, 1);
        assert!(!grid.percolates());
    }

    #[test]
    fn two_by_two_column_percolates() {
        let mut grid = Percolation::new(2);
        grid.open(0, 1);
        grid.open(1, 1);
        assert!(grid.percolates());
    }

    #[test]
    fn diagonal_does_not_connect() {
        let mut grid = Percolation::new(2);
        grid.open(0, 0);
        grid.open(1, 1);
        assert!(!grid.percolates());
        assert!(!grid.is_full(1, 1));
    }

    #[test]
    fn no_backwash_into_bottom_row() {
        let mut grid = Percolation::new(3);
        for row in 0..3 {
            grid.open(row, 0);
        }
        grid.open(2, 2);
        assert!(grid.percolates());
        assert!(grid.is_full(2, 0));
        assert!(grid.is_open(2, 2));
        assert!(!grid.is_full(2, 2));
    }

    #[test]
    fn grid_snapshot_marks_states() {
        let mut grid = Percolation::new(2);
        grid.open(0, 0);
        grid.open(1, 1);
        assert_eq!(
            grid.grid(),
            vec![
                vec![CellState::Full, CellState::Blocked],
                vec![CellState::Blocked, CellState::Open],
            ]
        );
        assert_eq!(grid.blocked_cells(), vec![(0, 1), (1, 0)]);
        assert_eq!(grid.open_fraction(), 0.5);
    }
}
