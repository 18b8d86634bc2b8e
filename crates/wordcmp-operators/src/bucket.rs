//! Bucketed word set: 26 growable sequences keyed by initial letter.
//!
//! Invariants:
//! - every word in bucket `l` satisfies `Letter::of_word(word) == Some(l)`;
//! - words with no letter key are dropped on insert, never stored;
//! - no deduplication, the set is a multiset;
//! - words are byte strings compared exactly, whatever their encoding.

use serde::{Deserialize, Serialize};

use wordcmp_core::error::Result;
use wordcmp_core::letter::{Letter, ALPHABET_SIZE};
use wordcmp_core::lines::{LineSink, LineSource, Lines};
use wordcmp_mem::GrowVec;

use crate::sort::heap::{heap_sort, is_sorted};

/// Counters from `WordSet::load`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub read: usize,
    pub inserted: usize,
    pub skipped: usize,
}

/// Counters from `WordSet::filter_into`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub read: usize,
    pub matched: usize,
}

#[derive(Debug, Clone)]
pub struct WordSet {
    buckets: [GrowVec<Vec<u8>>; ALPHABET_SIZE],
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSet {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| GrowVec::new()),
        }
    }

    /// Partition key for `word`, or `None` when it belongs to no bucket.
    pub fn bucket_index(word: &[u8]) -> Option<Letter> {
        Letter::of_word(word)
    }

    /// Append `word` verbatim to its bucket. Returns `false` (and stores
    /// nothing) for words without a letter key.
    pub fn insert(&mut self, word: impl Into<Vec<u8>>) -> bool {
        let word = word.into();
        match Self::bucket_index(&word) {
            Some(letter) => {
                self.buckets[letter.index()].push(word);
                true
            }
            None => false,
        }
    }

    /// Case-sensitive exact match, scanning only the word's bucket.
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        let word = word.as_ref();
        match Self::bucket_index(word) {
            Some(letter) => self.buckets[letter.index()].contains(word),
            None => false,
        }
    }

    /// Insert every line of `source`. On a read error the words inserted so far
    /// stay in the set.
    pub fn load(&mut self, source: &mut dyn LineSource) -> Result<LoadStats> {
        let mut stats = LoadStats::default();
        for line in Lines::new(source) {
            let line = line?;
            stats.read += 1;
            if self.insert(line) {
                stats.inserted += 1;
            } else {
                stats.skipped += 1;
            }
        }
        Ok(stats)
    }

    /// Insert into `target` every line of `source` that this set contains.
    /// Repeated lines in `source` are inserted repeatedly.
    pub fn filter_into(
        &self,
        source: &mut dyn LineSource,
        target: &mut WordSet,
    ) -> Result<FilterStats> {
        let mut stats = FilterStats::default();
        for line in Lines::new(source) {
            let line = line?;
            stats.read += 1;
            if self.contains(&line) {
                target.insert(line);
                stats.matched += 1;
            }
        }
        Ok(stats)
    }

    /// Heap-sort each bucket independently.
    pub fn sort_all(&mut self) {
        for bucket in &mut self.buckets {
            heap_sort(bucket.as_mut_slice());
            debug_assert!(is_sorted(bucket.as_slice()));
        }
    }

    /// Write all words, bucket `a` first, one per line, then flush the sink.
    /// Returns the number of lines written.
    pub fn serialize(&self, sink: &mut dyn LineSink) -> Result<usize> {
        let mut written = 0;
        for word in self.iter() {
            sink.write_line(word)?;
            written += 1;
        }
        sink.finish()?;
        Ok(written)
    }

    pub fn bucket(&self, letter: Letter) -> &GrowVec<Vec<u8>> {
        &self.buckets[letter.index()]
    }

    /// All 26 buckets with their letters, in ascending order.
    pub fn buckets(&self) -> impl Iterator<Item = (Letter, &GrowVec<Vec<u8>>)> {
        Letter::all().zip(self.buckets.iter())
    }

    /// Every word in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.buckets
            .iter()
            .flat_map(|b| b.iter().map(Vec::as_slice))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(GrowVec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(GrowVec::is_empty)
    }

    /// Buffer growths summed over all buckets.
    pub fn reallocations(&self) -> usize {
        self.buckets.iter().map(GrowVec::reallocations).sum()
    }
}
