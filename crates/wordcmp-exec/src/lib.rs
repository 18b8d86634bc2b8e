#![forbid(unsafe_code)]
//! wordcmp-exec: the four-stage intersection pipeline and its run report.
//!
//! Stages run sequentially: load the reference list, filter the second list
//! through it, sort the matches, write them out. A stage that fails is
//! recorded in the `RunReport` and the remaining stages still run.

pub mod metrics;
pub mod pipeline;
pub mod report;

pub use pipeline::{ExecError, Pipeline};
pub use report::{RunReport, Stage, StageFailure};
