#![forbid(unsafe_code)]
//! wordcmp-core: shared types for the word-list intersection tool.
//!
//! - `letter`: the closed 26-letter partition key.
//! - `config`: pipeline configuration (defaults, env, YAML).
//! - `lines`: line-source / line-sink / store traits implemented by `wordcmp-io`.
//!
//! Core performs no filesystem access of its own.

pub mod config;
pub mod error;
pub mod letter;
pub mod lines;
pub mod prelude;
