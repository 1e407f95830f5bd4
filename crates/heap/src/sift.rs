//! Resumable sift-up / sift-down sequences.
//!
//! Each iterator holds the heap by `&mut`, so no other operation can touch
//! the heap while a sequence is alive. Every `next()` performs at most one
//! array mutation and returns the resulting [`HeapStep`].

use std::fmt::Display;
use std::iter::FusedIterator;
use std::mem;

use algoviz_util::Highlight;

use crate::heap::{left, parent, right, Heap};
use crate::step::{HeapAction, HeapStep};

enum UpPhase<T> {
    Place(T),
    Compare(usize),
    Swap { child: usize, parent: usize },
    Settle(usize),
    Finished,
}

/// Step iterator returned by [`Heap::insert`].
pub struct SiftUp<'a, T> {
    heap: &'a mut Heap<T>,
    phase: UpPhase<T>,
}

impl<'a, T> SiftUp<'a, T> {
    pub(crate) fn new(heap: &'a mut Heap<T>, value: T) -> Self {
        Self {
            heap,
            phase: UpPhase::Place(value),
        }
    }
}

impl<T: PartialOrd + Clone + Display> SiftUp<'_, T> {
    fn step(&self, action: HeapAction<T>, description: String, highlight: Highlight) -> HeapStep<T> {
        HeapStep {
            heap: self.heap.data.clone(),
            action,
            description,
            highlight,
        }
    }
}

impl<T: PartialOrd + Clone + Display> Iterator for SiftUp<'_, T> {
    type Item = HeapStep<T>;

    fn next(&mut self) -> Option<HeapStep<T>> {
        match mem::replace(&mut self.phase, UpPhase::Finished) {
            UpPhase::Place(value) => {
                let index = self.heap.data.len();
                let description = format!("Insert {value} at index {index}");
                self.heap.data.push(value.clone());
                self.phase = UpPhase::Compare(index);
                Some(self.step(
                    HeapAction::Place { index, value },
                    description,
                    Highlight::active([index]),
                ))
            }
            UpPhase::Compare(0) => {
                let value = &self.heap.data[0];
                let description = format!("{value} reached the root; heap property holds");
                Some(self.step(
                    HeapAction::Settled {
                        index: 0,
                        at_root: true,
                    },
                    description,
                    Highlight::active([0]),
                ))
            }
            UpPhase::Compare(child) => {
                let p = parent(child);
                let data = &self.heap.data;
                let kind = self.heap.kind;
                let dominates = kind.dominates(&data[child], &data[p]);
                let description = if dominates {
                    format!(
                        "Compare {} with parent {}: {} {} {}, swap needed",
                        data[child],
                        data[p],
                        data[child],
                        kind.relation(),
                        data[p]
                    )
                } else {
                    format!(
                        "Compare {} with parent {}: parent stays above",
                        data[child], data[p]
                    )
                };
                self.phase = if dominates {
                    UpPhase::Swap { child, parent: p }
                } else {
                    UpPhase::Settle(child)
                };
                Some(self.step(
                    HeapAction::Compare { child, parent: p },
                    description,
                    Highlight::compared([child, p]),
                ))
            }
            UpPhase::Swap { child, parent } => {
                self.heap.data.swap(child, parent);
                let description = format!(
                    "Swap {} up to index {parent}, {} down to index {child}",
                    self.heap.data[parent], self.heap.data[child]
                );
                self.phase = UpPhase::Compare(parent);
                Some(self.step(
                    HeapAction::Swap {
                        from: child,
                        to: parent,
                    },
                    description,
                    Highlight::swapped([child, parent]),
                ))
            }
            UpPhase::Settle(index) => {
                let description = format!(
                    "{} stays at index {index}; heap property holds",
                    self.heap.data[index]
                );
                Some(self.step(
                    HeapAction::Settled {
                        index,
                        at_root: index == 0,
                    },
                    description,
                    Highlight::active([index]),
                ))
            }
            UpPhase::Finished => None,
        }
    }
}

impl<T: PartialOrd + Clone + Display> FusedIterator for SiftUp<'_, T> {}

enum DownPhase {
    Start,
    Remove,
    Compare(usize),
    Swap { parent: usize, child: usize },
    Settle(usize),
    Finished,
}

/// Step iterator returned by [`Heap::extract_root`].
pub struct SiftDown<'a, T> {
    heap: &'a mut Heap<T>,
    phase: DownPhase,
}

impl<'a, T> SiftDown<'a, T> {
    pub(crate) fn new(heap: &'a mut Heap<T>) -> Self {
        Self {
            heap,
            phase: DownPhase::Start,
        }
    }
}

impl<T: PartialOrd + Clone + Display> SiftDown<'_, T> {
    fn step(&self, action: HeapAction<T>, description: String, highlight: Highlight) -> HeapStep<T> {
        HeapStep {
            heap: self.heap.data.clone(),
            action,
            description,
            highlight,
        }
    }

    /// Index of the child that would move up, left winning exact ties.
    fn dominant_child(&self, idx: usize) -> Option<usize> {
        let len = self.heap.data.len();
        let (l, r) = (left(idx), right(idx));
        if l >= len {
            return None;
        }
        if r < len && self.heap.kind.dominates(&self.heap.data[r], &self.heap.data[l]) {
            Some(r)
        } else {
            Some(l)
        }
    }
}

impl<T: PartialOrd + Clone + Display> Iterator for SiftDown<'_, T> {
    type Item = HeapStep<T>;

    fn next(&mut self) -> Option<HeapStep<T>> {
        match mem::replace(&mut self.phase, DownPhase::Finished) {
            DownPhase::Start => match self.heap.data.len() {
                0 => Some(self.step(
                    HeapAction::Empty,
                    "Heap is empty; nothing to extract".to_string(),
                    Highlight::none(),
                )),
                1 => {
                    let value = self.heap.data.pop()?;
                    let description = format!("Remove {value}; heap is now empty");
                    Some(self.step(HeapAction::Remove { value }, description, Highlight::none()))
                }
                len => {
                    let last = len - 1;
                    self.heap.data.swap(0, last);
                    let description = format!(
                        "Swap root {} with last element {}",
                        self.heap.data[last], self.heap.data[0]
                    );
                    self.phase = DownPhase::Remove;
                    Some(self.step(
                        HeapAction::Swap { from: 0, to: last },
                        description,
                        Highlight::swapped([0, last]),
                    ))
                }
            },
            DownPhase::Remove => {
                let value = self.heap.data.pop()?;
                let description = format!(
                    "Remove {value} from the end; sift {} down from the root",
                    self.heap.data[0]
                );
                self.phase = DownPhase::Compare(0);
                Some(self.step(
                    HeapAction::Remove { value },
                    description,
                    Highlight::active([0]),
                ))
            }
            DownPhase::Compare(idx) => {
                let Some(child) = self.dominant_child(idx) else {
                    let description = format!(
                        "{} at index {idx} has no children; heap property holds",
                        self.heap.data[idx]
                    );
                    return Some(self.step(
                        HeapAction::Settled {
                            index: idx,
                            at_root: idx == 0,
                        },
                        description,
                        Highlight::active([idx]),
                    ));
                };
                let data = &self.heap.data;
                let kind = self.heap.kind;
                let dominates = kind.dominates(&data[child], &data[idx]);
                let description = if dominates {
                    format!(
                        "Compare {} with child {}: {} {} {}, swap needed",
                        data[idx],
                        data[child],
                        data[child],
                        kind.relation(),
                        data[idx]
                    )
                } else {
                    format!(
                        "Compare {} with child {}: parent stays above",
                        data[idx], data[child]
                    )
                };
                let mut compared = vec![idx, left(idx)];
                if right(idx) < data.len() {
                    compared.push(right(idx));
                }
                self.phase = if dominates {
                    DownPhase::Swap { parent: idx, child }
                } else {
                    DownPhase::Settle(idx)
                };
                Some(self.step(
                    HeapAction::Compare { child, parent: idx },
                    description,
                    Highlight::compared(compared),
                ))
            }
            DownPhase::Swap { parent, child } => {
                self.heap.data.swap(parent, child);
                let description = format!(
                    "Swap {} down to index {child}, {} up to index {parent}",
                    self.heap.data[child], self.heap.data[parent]
                );
                self.phase = DownPhase::Compare(child);
                Some(self.step(
                    HeapAction::Swap {
                        from: parent,
                        to: child,
                    },
                    description,
                    Highlight::swapped([parent, child]),
                ))
            }
            DownPhase::Settle(index) => {
                let description = format!(
                    "{} stays at index {index}; heap property holds",
                    self.heap.data[index]
                );
                Some(self.step(
                    HeapAction::Settled {
                        index,
                        at_root: index == 0,
                    },
                    description,
                    Highlight::active([index]),
                ))
            }
            DownPhase::Finished => None,
        }
    }
}

impl<T: PartialOrd + Clone + Display> FusedIterator for SiftDown<'_, T> {}
