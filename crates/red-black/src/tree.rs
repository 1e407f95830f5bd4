use std::fmt::{self, Debug, Display};
use std::iter::FusedIterator;

use crate::diagnostics::{self, TreeStats, Violation};
use crate::print::print;
use crate::step::TreeSnapshot;
use crate::types::RbNode;
use crate::util::{self, first, last, next};

/// Red-black tree over an arena of [`RbNode`]s.
///
/// Node ids are arena indices and stay stable for the life of the tree;
/// nothing is ever removed except by [`RbTree::clear`]. Insertion and search
/// live in their own modules and return full step traces.
#[derive(Debug, Clone)]
pub struct RbTree<K> {
    pub(crate) arena: Vec<RbNode<K>>,
    pub(crate) root: Option<u32>,
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RbTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|r| self.key(r))
    }

    pub fn node(&self, id: u32) -> Option<&RbNode<K>> {
        self.arena.get(id as usize)
    }

    pub(crate) fn key(&self, id: u32) -> &K {
        &self.arena[id as usize].k
    }

    pub fn min(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn max(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| self.key(i))
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
        }
    }

    /// Nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Black nodes below the root on every root-to-leaf path, or `None` if
    /// the paths disagree.
    pub fn black_height(&self) -> Option<usize> {
        diagnostics::black_height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }
}

impl<K: Ord> RbTree<K> {
    pub fn contains(&self, key: &K) -> bool {
        util::find(&self.arena, self.root, key, |n| &n.k).is_some()
    }

    pub fn violations(&self) -> Vec<Violation> {
        diagnostics::violations(&self.arena, self.root)
    }

    /// Returns the first violation found, if any.
    pub fn assert_valid(&self) -> Result<(), Violation> {
        match self.violations().into_iter().next() {
            Some(v) => Err(v),
            None => Ok(()),
        }
    }

    pub fn stats(&self) -> TreeStats {
        diagnostics::stats(&self.arena, self.root)
    }
}

impl<K: Clone> RbTree<K> {
    pub fn snapshot(&self) -> TreeSnapshot<K> {
        TreeSnapshot::capture(&self.arena, self.root)
    }
}

impl<K: Debug> RbTree<K> {
    pub fn print(&self) -> String {
        print(&self.arena, self.root, "")
    }
}

impl<K: Debug> Display for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<K: Ord + Clone + Display> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord + Clone + Display> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// In-order iterator returned by [`RbTree::keys`].
pub struct Keys<'a, K> {
    arena: &'a [RbNode<K>],
    curr: Option<u32>,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        Some(&self.arena[i as usize].k)
    }
}

impl<K> FusedIterator for Keys<'_, K> {}
