//! In-memory line store for testing.
//!
//! Resources are named vectors of lines held in a shared HashMap. Sinks write
//! their lines back into the map when finished, so tests can inspect the
//! result through any clone of the store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use wordcmp_core::error::{Error, Result};
use wordcmp_core::lines::{LineSink, LineSource, LineStore};

type Resources = HashMap<String, Vec<Vec<u8>>>;

/// Thread-safe in-memory store using a HashMap.
#[derive(Clone, Default)]
pub struct MemoryLineStore {
    data: Arc<Mutex<Resources>>,
}

impl MemoryLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Resources> {
        // A poisoned map still holds consistent line vectors.
        self.data.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Pre-populate a resource (used by tests).
    pub fn insert<S: AsRef<[u8]>>(&self, name: impl Into<String>, lines: impl IntoIterator<Item = S>) {
        let lines = lines.into_iter().map(|l| l.as_ref().to_vec()).collect();
        self.lock().insert(name.into(), lines);
    }

    /// Lines currently stored under `name`.
    pub fn lines(&self, name: &str) -> Option<Vec<Vec<u8>>> {
        self.lock().get(name).cloned()
    }
}

pub struct MemoryLineSource {
    name: String,
    lines: std::vec::IntoIter<Vec<u8>>,
}

impl MemoryLineSource {
    pub fn new<S: AsRef<[u8]>>(name: impl Into<String>, lines: impl IntoIterator<Item = S>) -> Self {
        let lines: Vec<Vec<u8>> = lines.into_iter().map(|l| l.as_ref().to_vec()).collect();
        Self {
            name: name.into(),
            lines: lines.into_iter(),
        }
    }
}

impl LineSource for MemoryLineSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.lines.next())
    }
}

pub struct MemoryLineSink {
    name: String,
    pending: Vec<Vec<u8>>,
    store: MemoryLineStore,
}

impl LineSink for MemoryLineSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.pending.push(line.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut data = self.store.lock();
        data.entry(self.name.clone())
            .or_default()
            .append(&mut self.pending);
        Ok(())
    }
}

impl LineStore for MemoryLineStore {
    fn open_source(&self, name: &str) -> Result<Box<dyn LineSource>> {
        let lines = self.lines(name).ok_or_else(|| Error::Open {
            resource: name.to_string(),
            reason: "no such resource".into(),
        })?;
        Ok(Box::new(MemoryLineSource::new(name, lines)))
    }

    fn create_sink(&self, name: &str) -> Result<Box<dyn LineSink>> {
        // Truncate on create, like File::create.
        self.lock().insert(name.to_string(), Vec::new());
        Ok(Box::new(MemoryLineSink {
            name: name.to_string(),
            pending: Vec::new(),
            store: self.clone(),
        }))
    }
}
