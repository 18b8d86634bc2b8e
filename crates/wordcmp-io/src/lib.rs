#![forbid(unsafe_code)]
//! wordcmp-io: concrete line sources, sinks, and stores.
//!
//! - `fs`: buffered local-file implementations (default).
//! - `memory`: HashMap-backed store for tests, no file I/O.

pub mod fs;
pub mod memory;

pub use fs::{FsLineSink, FsLineSource, FsLineStore};
pub use memory::MemoryLineStore;

/// Strip one trailing `\n` and then one trailing `\r`, in place.
///
/// Word lists saved on Windows end lines with `\r\n`. Folding both endings
/// makes `Dog\r\n` and `Dog\n` the same word, so CRLF and LF inputs intersect.
pub(crate) fn trim_line_end(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}
