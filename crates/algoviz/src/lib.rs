//! Step-traced algorithm engines for visualization front ends.
//!
//! Each engine mutates its own data structure and reports what it did as a
//! sequence of serializable steps. Rendering, timing and input are left to
//! the caller.
//!
//! | Engine | Crate | Entry points |
//! |--------|-------|--------------|
//! | Binary heap | [`heap`] | [`Heap::insert`], [`Heap::extract_root`] |
//! | Disjoint sets | [`union_find`] | [`UnionFind::union`], [`UnionFind::find`] |
//! | Percolation | [`percolation`] | [`Percolation::open`], [`PercolationStats::run`] |
//! | Red-black tree | [`red_black`] | [`RbTree::insert`], [`RbTree::search`] |
//!
//! The [`cli`] module drives the engines from JSON scenarios and backs the
//! `algoviz-trace` and `percolation-stats` binaries.

pub use algoviz_heap as heap;
pub use algoviz_percolation as percolation;
pub use algoviz_red_black as red_black;
pub use algoviz_union_find as union_find;
pub use algoviz_util as util;

pub use algoviz_heap::{Heap, HeapAction, HeapKind, HeapStep};
pub use algoviz_percolation::{OpenOutcome, Percolation, PercolationStats};
pub use algoviz_red_black::{InsertTrace, RbAction, RbStep, RbTree, SearchTrace};
pub use algoviz_union_find::UnionFind;
pub use algoviz_util::{narrate, Fuzzer, Highlight, TraceStep};

pub mod cli;
