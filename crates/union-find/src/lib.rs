//! Union-find (disjoint set) over a fixed universe of `n` elements.
//!
//! Elements are `usize` ordinals in `0..n`. The structure is sized once at
//! construction and never grows or shrinks; sets only ever merge.
//!
//! ```
//! use algoviz_union_find::UnionFind;
//!
//! let mut uf = UnionFind::new(4);
//! assert!(uf.union(0, 1));
//! assert!(!uf.union(1, 0));
//! assert!(uf.connected(0, 1));
//! assert!(!uf.connected(0, 2));
//! assert_eq!(uf.count(), 3);
//! ```

use std::cmp::Ordering;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnionFindError {
    #[error("element {index} is out of range for a union-find of {len} elements")]
    OutOfRange { index: usize, len: usize },
}

/// Disjoint-set forest with full path compression and union by rank.
///
/// `find` re-points every node it visits straight at the representative, and
/// `union` hangs the lower-rank root under the higher-rank one, so trees stay
/// O(log n) deep and `find` is amortized near-constant.
///
/// Out-of-range indices are a caller bug: [`UnionFind::find`],
/// [`UnionFind::union`] and [`UnionFind::connected`] panic on them. The
/// `try_*` variants report [`UnionFindError::OutOfRange`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = x;
        while self.parent[curr] != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already
    /// connected.
    ///
    /// On equal ranks the root of `x` becomes the new representative.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        let (root, child) = match self.rank[rx].cmp(&self.rank[ry]) {
            Ordering::Less => (ry, rx),
            Ordering::Greater => (rx, ry),
            Ordering::Equal => {
                self.rank[rx] += 1;
                (rx, ry)
            }
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        true
    }

    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    fn check(&self, index: usize) -> Result<(), UnionFindError> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                index,
                len: self.parent.len(),
            })
        }
    }

    pub fn try_find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        self.check(x)?;
        Ok(self.find(x))
    }

    pub fn try_union(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.union(x, y))
    }

    pub fn try_connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.connected(x, y))
    }

    /// Current parent pointer of `x`, without compressing anything.
    pub fn parent_of(&self, x: usize) -> usize {
        self.parent[x]
    }

    /// Rank of `x`. Only meaningful for representatives.
    pub fn rank_of(&self, x: usize) -> u8 {
        self.rank[x]
    }
}
