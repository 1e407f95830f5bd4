use algoviz_util::{Highlight, TraceStep};
use serde::Serialize;

/// What a single heap micro-step did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HeapAction<T> {
    /// `value` was appended at `index`.
    Place { index: usize, value: T },
    /// `child` was compared against `parent`.
    Compare { child: usize, parent: usize },
    /// The values at `from` and `to` exchanged places.
    Swap { from: usize, to: usize },
    /// The former root left the array.
    Remove { value: T },
    /// The moving value stopped at `index`; the heap property holds again.
    Settled { index: usize, at_root: bool },
    /// Extraction was requested on an empty heap. Nothing changed.
    Empty,
}

impl<T> HeapAction<T> {
    pub fn tag(&self) -> &'static str {
        match self {
            HeapAction::Place { .. } => "place",
            HeapAction::Compare { .. } => "compare",
            HeapAction::Swap { .. } => "swap",
            HeapAction::Remove { .. } => "remove",
            HeapAction::Settled { .. } => "settled",
            HeapAction::Empty => "empty",
        }
    }
}

/// One inspectable state of a sift sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeapStep<T> {
    /// Full array contents right after the step.
    pub heap: Vec<T>,
    pub action: HeapAction<T>,
    pub description: String,
    pub highlight: Highlight,
}

impl<T> TraceStep for HeapStep<T> {
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
