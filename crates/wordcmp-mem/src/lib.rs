#![forbid(unsafe_code)]
//! wordcmp-mem: growable sequences with explicit capacity management.
//!
//! `GrowVec` keeps its own logical capacity and grows only by doubling, so the
//! allocation pattern is deterministic and observable (see `reallocations`).

pub mod error;
pub mod seq;

pub use error::{Error, Result};
pub use seq::GrowVec;
