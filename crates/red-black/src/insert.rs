//! Traced insertion.
//!
//! The node goes in as a red leaf. While its parent is red the fixup looks
//! at the uncle:
//!
//! - red uncle: parent and uncle turn black, grandparent turns red, and the
//!   grandparent becomes the current node;
//! - black (or missing) uncle with the node bent against its parent
//!   ("triangle"): rotate the parent to straighten the shape, then continue
//!   with the old parent as the current node;
//! - black uncle with node, parent and grandparent in a line: parent turns
//!   black, grandparent red, and the grandparent rotates away from the line.
//!
//! Finally the root is painted black. Every recolor and every rotation is
//! recorded as its own [`RbStep`].

use std::cmp::Ordering;
use std::fmt::Display;

use algoviz_util::Highlight;

use crate::step::{FixupCase, InsertOutcome, InsertTrace, RbAction, RbStep, TreeSnapshot};
use crate::tree::RbTree;
use crate::types::{Color, RbNode};
use crate::util::{get_l, get_p, get_r, rotate_left, rotate_right};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<K: Ord + Clone + Display> RbTree<K> {
    /// Inserts `key`, recording each structural change.
    ///
    /// A key that is already present is rejected with
    /// [`InsertOutcome::AlreadyExists`] and a single [`RbAction::Exists`]
    /// step; the tree is not modified.
    pub fn insert(&mut self, key: K) -> InsertTrace<K> {
        let mut steps = Vec::new();

        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(c) = curr {
            match key.cmp(&self.arena[c as usize].k) {
                Ordering::Equal => {
                    steps.push(self.step(
                        RbAction::Exists,
                        Some(FixupCase::Done),
                        vec![c],
                        format!("{key} already exists; nothing inserted"),
                    ));
                    return InsertTrace {
                        outcome: InsertOutcome::AlreadyExists(c),
                        steps,
                    };
                }
                Ordering::Less => {
                    parent = Some(c);
                    side = Side::Left;
                    curr = get_l(&self.arena, c);
                }
                Ordering::Greater => {
                    parent = Some(c);
                    side = Side::Right;
                    curr = get_r(&self.arena, c);
                }
            }
        }

        let n = self.arena.len() as u32;
        let mut node = RbNode::new(key);
        node.p = parent;
        self.arena.push(node);

        let Some(p) = parent else {
            self.root = Some(n);
            self.arena[n as usize].color = Color::Black;
            let description = format!("Insert {} as the root and color it black", self.key(n));
            steps.push(self.step(RbAction::Insert, Some(FixupCase::Done), vec![n], description));
            return InsertTrace {
                outcome: InsertOutcome::Inserted(n),
                steps,
            };
        };

        match side {
            Side::Left => self.arena[p as usize].l = Some(n),
            Side::Right => self.arena[p as usize].r = Some(n),
        }
        let parent_red = self.arena[p as usize].is_red();
        let description = format!(
            "Insert {} as red {} child of {} {}",
            self.key(n),
            if side == Side::Left { "left" } else { "right" },
            self.color_name(p),
            self.key(p),
        );
        let case = if parent_red {
            FixupCase::NeedsFixup
        } else {
            FixupCase::Done
        };
        steps.push(self.step(RbAction::Insert, Some(case), vec![n], description));

        self.fixup(n, &mut steps);
        InsertTrace {
            outcome: InsertOutcome::Inserted(n),
            steps,
        }
    }

    fn fixup(&mut self, mut x: u32, steps: &mut Vec<RbStep<K>>) {
        loop {
            let Some(mut p) = get_p(&self.arena, x) else {
                break;
            };
            if self.arena[p as usize].is_black() {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(g) = get_p(&self.arena, p) else {
                break;
            };

            let parent_side = self.side_of(p, g);
            let uncle = match parent_side {
                Side::Left => get_r(&self.arena, g),
                Side::Right => get_l(&self.arena, g),
            };

            if let Some(u) = uncle.filter(|&u| self.arena[u as usize].is_red()) {
                self.arena[p as usize].color = Color::Black;
                self.arena[u as usize].color = Color::Black;
                self.arena[g as usize].color = Color::Red;
                let description = format!(
                    "Uncle {} is red: color parent {} and uncle {} black, grandparent {} red",
                    self.key(u),
                    self.key(p),
                    self.key(u),
                    self.key(g),
                );
                steps.push(self.step(
                    RbAction::Recolor,
                    Some(FixupCase::UncleRed),
                    vec![p, u, g],
                    description,
                ));
                x = g;
                continue;
            }

            if self.side_of(x, p) != parent_side {
                let action = match parent_side {
                    Side::Left => {
                        self.rotate(p, Side::Left);
                        RbAction::RotateLeft
                    }
                    Side::Right => {
                        self.rotate(p, Side::Right);
                        RbAction::RotateRight
                    }
                };
                let description = format!(
                    "Triangle: rotate {} around parent {} so {} takes its place",
                    if action == RbAction::RotateLeft { "left" } else { "right" },
                    self.key(p),
                    self.key(x),
                );
                steps.push(self.step(
                    action,
                    Some(FixupCase::UncleBlackTriangle),
                    vec![p, x],
                    description,
                ));
                std::mem::swap(&mut x, &mut p);
            }

            self.arena[p as usize].color = Color::Black;
            self.arena[g as usize].color = Color::Red;
            let description = format!(
                "Line: color parent {} black and grandparent {} red",
                self.key(p),
                self.key(g),
            );
            steps.push(self.step(
                RbAction::Recolor,
                Some(FixupCase::UncleBlackLine),
                vec![p, g],
                description,
            ));

            let action = match parent_side {
                Side::Left => {
                    self.rotate(g, Side::Right);
                    RbAction::RotateRight
                }
                Side::Right => {
                    self.rotate(g, Side::Left);
                    RbAction::RotateLeft
                }
            };
            let description = format!(
                "Line: rotate {} around grandparent {}; {} moves up",
                if action == RbAction::RotateLeft { "left" } else { "right" },
                self.key(g),
                self.key(p),
            );
            steps.push(self.step(
                action,
                Some(FixupCase::UncleBlackLine),
                vec![g, p],
                description,
            ));
            break;
        }

        if let Some(root) = self.root {
            if self.arena[root as usize].is_red() {
                self.arena[root as usize].color = Color::Black;
                let description = format!("Root {} is red: color it black", self.key(root));
                steps.push(self.step(
                    RbAction::RootBlack,
                    Some(FixupCase::Done),
                    vec![root],
                    description,
                ));
            }
        }
    }

    fn side_of(&self, child: u32, parent: u32) -> Side {
        if get_l(&self.arena, parent) == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Rotates around `n`, keeping `self.root` current.
    fn rotate(&mut self, n: u32, direction: Side) {
        let was_root = self.root == Some(n);
        let top = match direction {
            Side::Left => rotate_left(&mut self.arena, n),
            Side::Right => rotate_right(&mut self.arena, n),
        };
        if was_root {
            self.root = Some(top);
        }
    }

    fn color_name(&self, id: u32) -> &'static str {
        self.arena[id as usize].color.as_str()
    }

    pub(crate) fn step(
        &self,
        action: RbAction,
        case: Option<FixupCase>,
        touched: Vec<u32>,
        description: String,
    ) -> RbStep<K> {
        let ids = touched.iter().map(|&id| id as usize);
        let highlight = match action {
            RbAction::RotateLeft | RbAction::RotateRight => Highlight::swapped(ids),
            RbAction::Visit => Highlight::compared(ids),
            _ => Highlight::active(ids),
        };
        RbStep {
            tree: TreeSnapshot::capture(&self.arena, self.root),
            action,
            case,
            touched,
            description,
            highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(trace: &InsertTrace<i32>) -> Vec<RbAction> {
        trace.steps.iter().map(|s| s.action).collect()
    }

    #[test]
    fn first_insert_becomes_black_root() {
        let mut tree = RbTree::new();
        let trace = tree.insert(10);
        assert_eq!(trace.outcome, InsertOutcome::Inserted(0));
        assert_eq!(actions(&trace), vec![RbAction::Insert]);
        assert_eq!(trace.steps[0].case, Some(FixupCase::Done));
        let root = trace.steps[0].tree.root_node().unwrap();
        assert_eq!(root.key, 10);
        assert_eq!(root.color, Color::Black);
    }

    #[test]
    fn ascending_three_rotate_once() {
        let mut tree = RbTree::new();
        tree.insert(10);
        let second = tree.insert(20);
        assert_eq!(actions(&second), vec![RbAction::Insert]);
        assert_eq!(second.steps[0].case, Some(FixupCase::Done));

        let third = tree.insert(30);
        assert_eq!(
            actions(&third),
            vec![RbAction::Insert, RbAction::Recolor, RbAction::RotateLeft]
        );
        assert_eq!(third.rotations(), 1);
        assert_eq!(third.steps[0].case, Some(FixupCase::NeedsFixup));
        assert_eq!(third.steps[1].case, Some(FixupCase::UncleBlackLine));
        assert_eq!(third.steps[1].touched, vec![1, 0]);
        assert_eq!(third.steps[2].touched, vec![0, 1]);

        let snapshot = &third.steps[2].tree;
        let root = snapshot.root_node().unwrap();
        assert_eq!(root.key, 20);
        assert_eq!(root.color, Color::Black);
        let left = snapshot.node(root.left.unwrap());
        let right = snapshot.node(root.right.unwrap());
        assert_eq!((left.key, left.color), (10, Color::Red));
        assert_eq!((right.key, right.color), (30, Color::Red));
        assert_eq!(left.parent, Some(root.id));
        assert_eq!(right.parent, Some(root.id));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn descending_three_rotate_right() {
        let mut tree = RbTree::new();
        tree.insert(30);
        tree.insert(20);
        let trace = tree.insert(10);
        assert_eq!(
            actions(&trace),
            vec![RbAction::Insert, RbAction::Recolor, RbAction::RotateRight]
        );
        assert_eq!(tree.root_key(), Some(&20));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn triangle_rotates_twice() {
        let mut tree = RbTree::new();
        tree.insert(10);
        tree.insert(30);
        let trace = tree.insert(20);
        assert_eq!(
            actions(&trace),
            vec![
                RbAction::Insert,
                RbAction::RotateRight,
                RbAction::Recolor,
                RbAction::RotateLeft
            ]
        );
        assert_eq!(trace.steps[1].case, Some(FixupCase::UncleBlackTriangle));
        assert_eq!(trace.steps[2].case, Some(FixupCase::UncleBlackLine));
        assert_eq!(trace.rotations(), 2);
        assert_eq!(tree.root_key(), Some(&20));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn red_uncle_flips_colors_and_root_is_repainted() {
        let mut tree = RbTree::new();
        tree.insert(20);
        tree.insert(10);
        tree.insert(30);
        let trace = tree.insert(5);
        assert_eq!(
            actions(&trace),
            vec![RbAction::Insert, RbAction::Recolor, RbAction::RootBlack]
        );
        assert_eq!(trace.steps[1].case, Some(FixupCase::UncleRed));
        assert_eq!(trace.steps[1].touched, vec![1, 2, 0]);
        assert_eq!(trace.rotations(), 0);
        assert_eq!(tree.root_key(), Some(&20));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn duplicate_is_rejected_without_mutation() {
        let mut tree = RbTree::new();
        for k in [5, 3, 8] {
            tree.insert(k);
        }
        let before = tree.snapshot();
        let trace = tree.insert(3);
        assert_eq!(trace.outcome, InsertOutcome::AlreadyExists(1));
        assert!(!trace.inserted());
        assert_eq!(actions(&trace), vec![RbAction::Exists]);
        assert_eq!(tree.snapshot(), before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn every_step_snapshot_is_consistent() {
        let mut tree = RbTree::new();
        for k in [41, 38, 31, 12, 19, 8, 50, 45, 1, 2, 3] {
            let trace = tree.insert(k);
            for step in &trace.steps {
                for node in &step.tree.nodes {
                    for child in [node.left, node.right].into_iter().flatten() {
                        assert_eq!(step.tree.node(child).parent, Some(node.id));
                    }
                }
                let keys: Vec<i32> = step.tree.in_order().into_iter().copied().collect();
                let mut sorted = keys.clone();
                sorted.sort_unstable();
                assert_eq!(keys, sorted);
            }
            tree.assert_valid().unwrap();
        }
    }
}
