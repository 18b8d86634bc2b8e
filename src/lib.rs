#![forbid(unsafe_code)]
//! wordcmp: intersect two word lists and write the matches grouped by initial
//! letter, each group heap-sorted.
//!
//! This facade re-exports the workspace crates:
//! - `core`: letter keys, configuration, line I/O traits
//! - `mem`: `GrowVec`, the capacity-doubling sequence
//! - `io`: filesystem and in-memory line stores
//! - `operators`: `WordSet` and `heap_sort`
//! - `exec`: the `Pipeline` and its `RunReport`

pub use wordcmp_core as core;
pub use wordcmp_exec as exec;
pub use wordcmp_io as io;
pub use wordcmp_mem as mem;
pub use wordcmp_operators as operators;

pub use wordcmp_core::config::PipelineConfig;
pub use wordcmp_exec::{Pipeline, RunReport};
pub use wordcmp_operators::WordSet;
