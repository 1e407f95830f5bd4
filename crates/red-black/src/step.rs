//! Trace records emitted by insertion and search.

use algoviz_util::{Highlight, TraceStep};
use serde::Serialize;

use crate::types::{Color, RbNode};

/// State of the insertion fixup when a step was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixupCase {
    /// The current node's parent is red.
    NeedsFixup,
    /// Red uncle: color flip, continue from the grandparent.
    UncleRed,
    /// Black uncle, node bent against its parent: straighten with one rotation.
    UncleBlackTriangle,
    /// Black uncle, node in line with parent and grandparent.
    UncleBlackLine,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RbAction {
    /// A new node was linked in.
    Insert,
    /// The key is present already; nothing changed.
    Exists,
    Recolor,
    RotateLeft,
    RotateRight,
    /// The root was red and has been painted black.
    RootBlack,
    /// Search compared against a node.
    Visit,
    Found,
    NotFound,
}

impl RbAction {
    pub fn tag(self) -> &'static str {
        match self {
            RbAction::Insert => "insert",
            RbAction::Exists => "exists",
            RbAction::Recolor => "recolor",
            RbAction::RotateLeft => "rotate_left",
            RbAction::RotateRight => "rotate_right",
            RbAction::RootBlack => "root_black",
            RbAction::Visit => "visit",
            RbAction::Found => "found",
            RbAction::NotFound => "not_found",
        }
    }

    pub fn is_rotation(self) -> bool {
        matches!(self, RbAction::RotateLeft | RbAction::RotateRight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotNode<K> {
    pub id: u32,
    pub key: K,
    pub color: Color,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub parent: Option<u32>,
}

/// Copy of the whole tree at one instant, indexed by node id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSnapshot<K> {
    pub root: Option<u32>,
    pub nodes: Vec<SnapshotNode<K>>,
}

impl<K: Clone> TreeSnapshot<K> {
    pub(crate) fn capture(arena: &[RbNode<K>], root: Option<u32>) -> Self {
        let nodes = arena
            .iter()
            .enumerate()
            .map(|(id, n)| SnapshotNode {
                id: id as u32,
                key: n.k.clone(),
                color: n.color,
                left: n.l,
                right: n.r,
                parent: n.p,
            })
            .collect();
        Self { root, nodes }
    }
}

impl<K> TreeSnapshot<K> {
    pub fn node(&self, id: u32) -> &SnapshotNode<K> {
        &self.nodes[id as usize]
    }

    pub fn root_node(&self) -> Option<&SnapshotNode<K>> {
        self.root.map(|r| self.node(r))
    }

    /// Keys in order.
    pub fn in_order(&self) -> Vec<&K> {
        fn walk<'a, K>(s: &'a TreeSnapshot<K>, node: Option<u32>, out: &mut Vec<&'a K>) {
            if let Some(id) = node {
                let n = s.node(id);
                walk(s, n.left, out);
                out.push(&n.key);
                walk(s, n.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.nodes.len());
        walk(self, self.root, &mut out);
        out
    }
}

/// One observable moment of an insertion or search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RbStep<K> {
    pub tree: TreeSnapshot<K>,
    pub action: RbAction,
    /// Fixup state for insertion steps; `None` for search steps.
    pub case: Option<FixupCase>,
    /// Node ids the step acted on.
    pub touched: Vec<u32>,
    pub description: String,
    pub highlight: Highlight,
}

impl<K> TraceStep for RbStep<K> {
    fn tag(&self) -> &'static str {
        self.action.tag()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "node", rename_all = "snake_case")]
pub enum InsertOutcome {
    Inserted(u32),
    /// Duplicate key; the tree was left untouched.
    AlreadyExists(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertTrace<K> {
    pub outcome: InsertOutcome,
    pub steps: Vec<RbStep<K>>,
}

impl<K> InsertTrace<K> {
    pub fn inserted(&self) -> bool {
        matches!(self.outcome, InsertOutcome::Inserted(_))
    }

    pub fn rotations(&self) -> usize {
        self.steps.iter().filter(|s| s.action.is_rotation()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTrace<K> {
    /// Id of the node holding the key.
    pub found: Option<u32>,
    pub steps: Vec<RbStep<K>>,
}
