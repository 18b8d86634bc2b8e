//! Shared word generators and scratch directories for integration tests.
#![allow(dead_code)]

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Small deterministic LCG so test inputs are reproducible.
pub struct WordGen {
    state: u64,
}

impl WordGen {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(6364136223846793005).wrapping_add(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }

    /// A word of 1..=6 chars drawn from letters (both cases), digits and a few
    /// punctuation marks, so some words are unclassifiable.
    pub fn word(&mut self) -> String {
        const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_ ";
        let len = 1 + (self.next_u32() % 6) as usize;
        (0..len)
            .map(|_| ALPHABET[(self.next_u32() as usize) % ALPHABET.len()] as char)
            .collect()
    }

    /// A word drawn from a small fixed vocabulary, to force repeats.
    pub fn common_word(&mut self) -> String {
        const VOCAB: &[&str] = &[
            "apple", "Apple", "banana", "cherry", "Dog", "dog", "eel", "fig", "grape", "kiwi",
            "lemon", "mango", "olive", "pear", "quince", "Zebra", "",
        ];
        VOCAB[(self.next_u32() as usize) % VOCAB.len()].to_string()
    }

    pub fn words(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.word()).collect()
    }
}

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh, empty scratch directory unique to this process and call.
pub fn create_temp_dir(tag: &str) -> String {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "wordcmp-tests-{}-{}-{}",
        tag,
        std::process::id(),
        DIR_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create temp dir");
    dir.to_string_lossy().to_string()
}

pub fn write_lines(path: &str, lines: &[&str]) {
    let mut body = String::new();
    for l in lines {
        body.push_str(l);
        body.push('\n');
    }
    fs::write(path, body).expect("write input file");
}

pub fn read_lines(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
