use std::cmp::Ordering;
use std::fmt::Display;

use crate::step::{RbAction, SearchTrace};
use crate::tree::RbTree;
use crate::util::{get_l, get_r};

impl<K: Ord + Clone + Display> RbTree<K> {
    /// Looks `key` up, recording every node compared on the way down.
    ///
    /// The tree is not modified.
    pub fn search(&self, key: &K) -> SearchTrace<K> {
        let mut steps = Vec::new();
        let mut curr = self.root;
        while let Some(c) = curr {
            let here = self.key(c);
            let (next, description) = match key.cmp(here) {
                Ordering::Equal => (None, format!("Compare {key} with {here}: equal")),
                Ordering::Less => (
                    get_l(&self.arena, c),
                    format!("Compare {key} with {here}: smaller, go left"),
                ),
                Ordering::Greater => (
                    get_r(&self.arena, c),
                    format!("Compare {key} with {here}: larger, go right"),
                ),
            };
            steps.push(self.step(RbAction::Visit, None, vec![c], description));
            if key == here {
                steps.push(self.step(RbAction::Found, None, vec![c], format!("Found {key}")));
                return SearchTrace {
                    found: Some(c),
                    steps,
                };
            }
            curr = next;
        }
        steps.push(self.step(
            RbAction::NotFound,
            None,
            Vec::new(),
            format!("{key} is not in the tree"),
        ));
        SearchTrace { found: None, steps }
    }
}
