//! algoviz-util - Pieces shared by every stepwise engine.
//!
//! The engines never share runtime state. What they do share is the shape of
//! a trace step (see [`step`]) and, for caller-side simulations, a seedable
//! random source (see [`fuzzer`]).

pub mod fuzzer;
pub mod step;

// Re-exports for convenience
pub use fuzzer::Fuzzer;
pub use step::{narrate, Highlight, TraceStep};
