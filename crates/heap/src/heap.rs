use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sift::{SiftDown, SiftUp};
use crate::step::HeapAction;

/// Ordering rule of a heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapKind {
    /// Largest value at the root.
    #[default]
    Max,
    /// Smallest value at the root.
    Min,
}

impl HeapKind {
    /// Whether `a` must sit above `b` under this ordering.
    ///
    /// Equal values never dominate each other, so sifting stops on ties.
    #[inline]
    pub fn dominates<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            HeapKind::Max => a > b,
            HeapKind::Min => a < b,
        }
    }

    /// The comparison symbol used in step descriptions.
    pub fn relation(self) -> &'static str {
        match self {
            HeapKind::Max => ">",
            HeapKind::Min => "<",
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapKind::Max => f.write_str("max"),
            HeapKind::Min => f.write_str("min"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap kind can only change while the heap is empty ({len} values present)")]
    NotEmpty { len: usize },
}

#[inline]
pub(crate) fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

#[inline]
pub(crate) fn left(idx: usize) -> usize {
    2 * idx + 1
}

#[inline]
pub(crate) fn right(idx: usize) -> usize {
    2 * idx + 2
}

/// Binary heap over a `Vec`, ordered as a max-heap or a min-heap.
///
/// The heap is only mutated through [`Heap::insert`] and
/// [`Heap::extract_root`] (and the [`Heap::push`] / [`Heap::pop`] drivers
/// built on them). Between two steps of an unfinished sequence the heap
/// property may be transiently violated; once a sequence has been consumed
/// to its end the property holds again.
#[derive(Debug, Clone, PartialEq)]
pub struct Heap<T> {
    pub(crate) data: Vec<T>,
    pub(crate) kind: HeapKind,
}

impl<T> Heap<T> {
    pub fn new(kind: HeapKind) -> Self {
        Self {
            data: Vec::new(),
            kind,
        }
    }

    pub fn max() -> Self {
        Self::new(HeapKind::Max)
    }

    pub fn min() -> Self {
        Self::new(HeapKind::Min)
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Switch between max and min ordering.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::NotEmpty`] if the heap holds any value.
    pub fn set_kind(&mut self, kind: HeapKind) -> Result<(), HeapError> {
        if !self.data.is_empty() && kind != self.kind {
            return Err(HeapError::NotEmpty {
                len: self.data.len(),
            });
        }
        self.kind = kind;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The root, i.e. the dominant value.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Backing array in level order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: PartialOrd> Heap<T> {
    /// Whether every parent dominates-or-equals its children.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| !self.kind.dominates(&self.data[i], &self.data[parent(i)]))
    }
}

impl<T: PartialOrd + Clone + fmt::Display> Heap<T> {
    /// Start a traced insertion of `value`.
    ///
    /// Nothing happens until the first step is requested: the first step
    /// places `value` at the end of the array, the following ones sift it up.
    /// Dropping the iterator early leaves the array exactly as the last
    /// consumed step shows it.
    pub fn insert(&mut self, value: T) -> SiftUp<'_, T> {
        SiftUp::new(self, value)
    }

    /// Start a traced removal of the root.
    ///
    /// On an empty heap the sequence is a single [`HeapAction::Empty`] step.
    /// The removed value is carried by the [`HeapAction::Remove`] step.
    pub fn extract_root(&mut self) -> SiftDown<'_, T> {
        SiftDown::new(self)
    }

    /// Insert `value` and run the sift-up to completion.
    pub fn push(&mut self, value: T) {
        self.insert(value).for_each(drop);
    }

    /// Remove the root and run the sift-down to completion.
    pub fn pop(&mut self) -> Option<T> {
        let mut removed = None;
        for step in self.extract_root() {
            if let HeapAction::Remove { value } = step.action {
                removed = Some(value);
            }
        }
        removed
    }

    /// Build a heap by pushing `values` one by one.
    pub fn from_values(kind: HeapKind, values: impl IntoIterator<Item = T>) -> Self {
        let mut heap = Self::new(kind);
        for value in values {
            heap.push(value);
        }
        heap
    }

    /// Pop everything, returning values in extraction order.
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }
}

impl<T> Default for Heap<T> {
    fn default() -> Self {
        Self::max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_heap_is_empty_and_valid() {
        let heap: Heap<i32> = Heap::min();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert!(heap.peek().is_none());
        assert!(heap.is_valid());
    }

    #[test]
    fn dominance_by_kind() {
        assert!(HeapKind::Max.dominates(&5, &3));
        assert!(!HeapKind::Max.dominates(&3, &5));
        assert!(HeapKind::Min.dominates(&3, &5));
        assert!(!HeapKind::Min.dominates(&4, &4));
        assert!(!HeapKind::Max.dominates(&4, &4));
    }

    #[test]
    fn kind_change_requires_empty_heap() {
        let mut heap = Heap::max();
        heap.set_kind(HeapKind::Min).unwrap();
        assert_eq!(heap.kind(), HeapKind::Min);

        heap.push(1);
        assert_eq!(
            heap.set_kind(HeapKind::Max),
            Err(HeapError::NotEmpty { len: 1 })
        );
        heap.set_kind(HeapKind::Min).unwrap();

        heap.clear();
        heap.set_kind(HeapKind::Max).unwrap();
        assert_eq!(heap.kind(), HeapKind::Max);
    }

    #[test]
    fn push_maintains_max_property() {
        let mut heap = Heap::max();
        for v in [30, 10, 20, 50, 40, 5] {
            heap.push(v);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.peek(), Some(&50));
    }

    #[test]
    fn push_maintains_min_property() {
        let mut heap = Heap::min();
        for v in (1..=10).rev() {
            heap.push(v);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut heap: Heap<i32> = Heap::max();
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn pop_returns_in_order() {
        let mut heap = Heap::from_values(HeapKind::Max, [4, 1, 7, 3, 9, 2]);
        assert_eq!(heap.drain_sorted(), vec![9, 7, 4, 3, 2, 1]);

        let mut heap = Heap::from_values(HeapKind::Min, [4, 1, 7, 3, 9, 2]);
        assert_eq!(heap.drain_sorted(), vec![1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut heap = Heap::from_values(HeapKind::Min, [2, 2, 1, 1]);
        assert_eq!(heap.drain_sorted(), vec![1, 1, 2, 2]);
    }

    #[test]
    fn floats_are_accepted() {
        let mut heap = Heap::from_values(HeapKind::Max, [1.5, -2.0, 3.25]);
        assert_eq!(heap.pop(), Some(3.25));
        assert_eq!(heap.pop(), Some(1.5));
        assert_eq!(heap.pop(), Some(-2.0));
    }

    #[test]
    fn kind_display() {
        assert_eq!(HeapKind::Max.to_string(), "max");
        assert_eq!(HeapKind::Min.to_string(), "min");
    }
}
