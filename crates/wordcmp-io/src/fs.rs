//! Local filesystem line I/O.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use wordcmp_core::error::{Error, Result};
use wordcmp_core::lines::{LineSink, LineSource, LineStore};

use crate::trim_line_end;

/// Read buffer size; word lists are small, this bounds in-flight bytes.
const READ_BUF_CAPACITY: usize = 64 * 1024;

/// Reads a file line by line through a bounded `BufReader`.
pub struct FsLineSource {
    name: String,
    reader: BufReader<File>,
}

impl FsLineSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::Open {
            resource: name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name,
            reader: BufReader::with_capacity(READ_BUF_CAPACITY, file),
        })
    }
}

impl LineSource for FsLineSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let n = self
            .reader
            .read_until(b'\n', &mut line)
            .map_err(|e| Error::Read {
                resource: self.name.clone(),
                reason: e.to_string(),
            })?;
        if n == 0 {
            return Ok(None);
        }
        trim_line_end(&mut line);
        Ok(Some(line))
    }
}

/// Writes lines to a truncated file through a `BufWriter`.
pub struct FsLineSink {
    name: String,
    writer: BufWriter<File>,
}

impl FsLineSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::create(path).map_err(|e| Error::Open {
            resource: name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name,
            writer: BufWriter::new(file),
        })
    }

    fn write_err(&self, e: std::io::Error) -> Error {
        Error::Write {
            resource: self.name.clone(),
            reason: e.to_string(),
        }
    }
}

impl LineSink for FsLineSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.writer
            .write_all(line)
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|e| self.write_err(e))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.write_err(e))
    }
}

/// Store that resolves resource names as filesystem paths.
#[derive(Debug, Clone, Default)]
pub struct FsLineStore;

impl FsLineStore {
    pub fn new() -> Self {
        Self
    }
}

impl LineStore for FsLineStore {
    fn open_source(&self, name: &str) -> Result<Box<dyn LineSource>> {
        Ok(Box::new(FsLineSource::open(name)?))
    }

    fn create_sink(&self, name: &str) -> Result<Box<dyn LineSink>> {
        Ok(Box::new(FsLineSink::create(name)?))
    }
}
