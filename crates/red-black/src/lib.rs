//! Red-black tree with traced insertion and search.
//!
//! Nodes live in a `Vec` arena and refer to each other through `Option<u32>`
//! indices, parent links included. Every [`RbTree::insert`] returns an
//! [`InsertTrace`] with one [`RbStep`] per placement, recolor and rotation,
//! each carrying a full [`TreeSnapshot`], so a renderer can replay the
//! fixup without knowing anything about the algorithm.
//!
//! ```
//! use algoviz_red_black::{Color, RbAction, RbTree};
//!
//! let mut tree = RbTree::new();
//! tree.insert(10);
//! tree.insert(20);
//! let trace = tree.insert(30);
//! assert_eq!(trace.rotations(), 1);
//! assert_eq!(trace.steps.last().unwrap().action, RbAction::RotateLeft);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(tree.node(root).unwrap().k, 20);
//! assert_eq!(tree.node(root).unwrap().color, Color::Black);
//! assert!(tree.assert_valid().is_ok());
//! ```
//!
//! Deletion is not supported.

pub mod diagnostics;
mod insert;
pub mod print;
mod search;
pub mod step;
mod tree;
pub mod types;
pub mod util;

pub use diagnostics::{TreeStats, Violation};
pub use step::{
    FixupCase, InsertOutcome, InsertTrace, RbAction, RbStep, SearchTrace, SnapshotNode,
    TreeSnapshot,
};
pub use tree::{Keys, RbTree};
pub use types::{Color, Node, RbNode};
