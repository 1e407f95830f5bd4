//! Invariant checks, recomputed on demand from the arena.

use serde::Serialize;
use thiserror::Error;

use crate::types::RbNode;
use crate::util::{first, height, next};

/// A broken red-black or search-tree property.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    #[error("root {id} has a parent")]
    RootHasParent { id: u32 },
    #[error("root {id} is red")]
    RedRoot { id: u32 },
    #[error("red node {parent} has red child {child}")]
    RedRedEdge { parent: u32, child: u32 },
    #[error("black height mismatch under node {id}: left {left}, right {right}")]
    BlackHeightMismatch { id: u32, left: usize, right: usize },
    #[error("child {id} does not point back to its parent")]
    BrokenParentLink { id: u32 },
    #[error("keys out of order at nodes {prev} and {next}")]
    OrderViolated { prev: u32, next: u32 },
}

/// Shape and color summary of a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub size: usize,
    pub height: usize,
    pub black_height: Option<usize>,
    pub red_count: usize,
    pub black_count: usize,
    pub violations: Vec<Violation>,
}

/// Collects every violation in the tree under `root`.
pub fn violations<K: Ord>(arena: &[RbNode<K>], root: Option<u32>) -> Vec<Violation> {
    let mut out = Vec::new();
    let Some(root) = root else {
        return out;
    };
    let r = &arena[root as usize];
    if r.p.is_some() {
        out.push(Violation::RootHasParent { id: root });
    }
    if r.is_red() {
        out.push(Violation::RedRoot { id: root });
    }
    check(arena, root, &mut out);

    let mut prev = first(arena, Some(root));
    while let Some(p) = prev {
        let Some(n) = next(arena, p) else {
            break;
        };
        if arena[p as usize].k >= arena[n as usize].k {
            out.push(Violation::OrderViolated { prev: p, next: n });
        }
        prev = Some(n);
    }
    out
}

/// Returns the black count of `node` including itself.
fn check<K>(arena: &[RbNode<K>], node: u32, out: &mut Vec<Violation>) -> usize {
    let n = &arena[node as usize];
    let mut heights = [0, 0];
    for (slot, child) in [n.l, n.r].into_iter().enumerate() {
        let Some(c) = child else {
            continue;
        };
        let cn = &arena[c as usize];
        if cn.p != Some(node) {
            out.push(Violation::BrokenParentLink { id: c });
        }
        if n.is_red() && cn.is_red() {
            out.push(Violation::RedRedEdge {
                parent: node,
                child: c,
            });
        }
        heights[slot] = check(arena, c, out);
    }
    let [left, right] = heights;
    if left != right {
        out.push(Violation::BlackHeightMismatch {
            id: node,
            left,
            right,
        });
    }
    left.max(right) + usize::from(n.is_black())
}

fn uniform_black<K>(arena: &[RbNode<K>], node: Option<u32>) -> Option<usize> {
    let Some(i) = node else {
        return Some(0);
    };
    let n = &arena[i as usize];
    let l = uniform_black(arena, n.l)?;
    let r = uniform_black(arena, n.r)?;
    (l == r).then(|| l + usize::from(n.is_black()))
}

/// Black nodes on any path from `root` down to a leaf, not counting `root`
/// itself. `None` when paths disagree.
pub fn black_height<K>(arena: &[RbNode<K>], root: Option<u32>) -> Option<usize> {
    let Some(r) = root else {
        return Some(0);
    };
    let n = &arena[r as usize];
    let total = uniform_black(arena, Some(r))?;
    Some(total - usize::from(n.is_black()))
}

pub fn stats<K: Ord>(arena: &[RbNode<K>], root: Option<u32>) -> TreeStats {
    let mut red_count = 0;
    let mut black_count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        if arena[i as usize].is_red() {
            red_count += 1;
        } else {
            black_count += 1;
        }
        curr = next(arena, i);
    }
    TreeStats {
        size: red_count + black_count,
        height: height(arena, root),
        black_height: black_height(arena, root),
        red_count,
        black_count,
        violations: violations(arena, root),
    }
}
