#![forbid(unsafe_code)]
//! wordcmp-operators: the bucketed word set and its bucket sorter.
//!
//! Design intent:
//! - Pure and synchronous; all I/O goes through `wordcmp_core::lines` traits.
//! - Buckets are `wordcmp_mem::GrowVec`s so growth follows the doubling schedule.

pub mod bucket;
pub mod sort;

pub use bucket::{FilterStats, LoadStats, WordSet};
pub use sort::heap::{heap_sort, is_sorted};
