use thiserror::Error;

/// Result type local to wordcmp-mem.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("index out of range: index {index}, len {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
