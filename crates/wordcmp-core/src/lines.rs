//! Abstract line I/O interfaces.
//!
//! The concrete implementations live in `wordcmp-io`. We keep only traits here
//! so the container and pipeline crates can depend on the API without touching
//! the filesystem.
//!
//! Lines are raw bytes. Nothing is decoded, so words compare and round-trip
//! exactly as they appear in the input.

use crate::error::Result;

/// Produces one line at a time from a named resource.
pub trait LineSource {
    /// Resource name used in diagnostics.
    fn name(&self) -> &str;

    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<Vec<u8>>>;
}

/// Writes each line followed by `\n`.
pub trait LineSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()>;

    /// Flush buffered output. Must be called before the sink is dropped.
    fn finish(&mut self) -> Result<()>;
}

/// Opens sources and sinks by resource name.
///
/// Failing to open is reported as `Error::Open` naming the resource.
pub trait LineStore {
    fn open_source(&self, name: &str) -> Result<Box<dyn LineSource>>;

    /// Create (or truncate) the named resource for writing.
    fn create_sink(&self, name: &str) -> Result<Box<dyn LineSink>>;
}

/// Iterator adapter over a `LineSource`; yields `Err` once and then stops.
pub struct Lines<'a> {
    source: &'a mut dyn LineSource,
    done: bool,
}

impl<'a> Lines<'a> {
    pub fn new(source: &'a mut dyn LineSource) -> Self {
        Self {
            source,
            done: false,
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
