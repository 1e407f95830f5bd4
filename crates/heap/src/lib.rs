//! Array-backed binary heap with traced sift-up and sift-down.
//!
//! [`Heap::insert`] and [`Heap::extract_root`] do not run to completion.
//! They return iterators that perform exactly one micro-step (placement,
//! comparison, swap, removal, settle) per call to `next()` and hand back a
//! [`HeapStep`] describing it, so an animation can pause between any two
//! steps.
//!
//! ```
//! use algoviz_heap::{Heap, HeapAction};
//!
//! let mut heap = Heap::max();
//! heap.push(3);
//! heap.push(9);
//!
//! let steps: Vec<_> = heap.insert(5).collect();
//! assert!(matches!(steps[0].action, HeapAction::Place { index: 2, .. }));
//! assert_eq!(heap.as_slice(), &[9, 3, 5]);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`heap`] | [`Heap`], [`HeapKind`], [`HeapError`] |
//! | [`sift`] | [`SiftUp`] / [`SiftDown`] step iterators |
//! | [`step`] | [`HeapStep`] and [`HeapAction`] records |

pub mod heap;
pub mod sift;
pub mod step;

pub use heap::{Heap, HeapError, HeapKind};
pub use sift::{SiftDown, SiftUp};
pub use step::{HeapAction, HeapStep};
