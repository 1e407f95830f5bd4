//! The common shape of a trace step.
//!
//! Every engine emits its own step type, but each one can report what
//! happened in words, which kind of action it was, and which positions a
//! renderer should emphasise. Positions are array indices for the heap and
//! arena node ids for the red-black tree.

use serde::Serialize;

/// Positions to emphasise when drawing a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Positions the step is acting on.
    pub active: Vec<usize>,
    /// Positions that were just compared.
    pub compared: Vec<usize>,
    /// Positions that just exchanged places (or were restructured).
    pub swapped: Vec<usize>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn active(ids: impl IntoIterator<Item = usize>) -> Self {
        Self {
            active: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn compared(ids: impl IntoIterator<Item = usize>) -> Self {
        Self {
            compared: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn swapped(ids: impl IntoIterator<Item = usize>) -> Self {
        Self {
            swapped: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.compared.is_empty() && self.swapped.is_empty()
    }

    /// Every highlighted position, in `active`, `compared`, `swapped` order.
    pub fn all(&self) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .chain(&self.compared)
            .chain(&self.swapped)
            .copied()
    }
}

/// Behaviour shared by the step records of every engine.
pub trait TraceStep {
    /// Short machine-readable tag, e.g. `"swap"` or `"rotate_left"`.
    fn tag(&self) -> &'static str;

    /// Human-readable account of the step.
    fn description(&self) -> &str;

    fn highlight(&self) -> &Highlight;
}

/// Renders a sequence of steps as numbered lines.
pub fn narrate<S: TraceStep>(steps: &[S]) -> String {
    let mut out = String::new();
    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{:>3}. [{}] {}", i + 1, step.tag(), step.description()));
    }
    out
}
