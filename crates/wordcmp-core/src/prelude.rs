//! Convenient re-exports for downstream crates.

pub use crate::config::PipelineConfig;
pub use crate::error::{Error, Result};
pub use crate::letter::{Letter, ALPHABET_SIZE};
pub use crate::lines::{LineSink, LineSource, LineStore};
