//! Bucketed word set properties: membership, partitioning, sorting.

mod test_data_gen;

use std::collections::HashMap;

use test_data_gen::WordGen;
use wordcmp_core::letter::Letter;
use wordcmp_io::memory::MemoryLineSource;
use wordcmp_operators::{is_sorted, WordSet};

fn snapshot(set: &WordSet) -> Vec<Vec<Vec<u8>>> {
    set.buckets().map(|(_, b)| b.iter().cloned().collect()).collect()
}

fn multiset<'a>(words: impl Iterator<Item = &'a [u8]>) -> HashMap<&'a [u8], usize> {
    let mut counts = HashMap::new();
    for w in words {
        *counts.entry(w).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_inserted_letter_words_are_found() {
    let mut gen = WordGen::new(7);
    let mut set = WordSet::new();
    for word in gen.words(2_000) {
        let classifiable = Letter::of_word(word.as_bytes()).is_some();
        assert_eq!(set.insert(word.clone()), classifiable, "word {:?}", word);
        assert_eq!(set.contains(&word), classifiable, "word {:?}", word);
    }
}

#[test]
fn test_unclassifiable_insert_leaves_set_unchanged() {
    let mut set = WordSet::new();
    set.insert("keep");
    let before = snapshot(&set);

    for w in ["", "0zero", " space", "-dash", "_under", "\u{e9}t\u{e9}", "[x"] {
        set.insert(w);
        assert!(!set.contains(w));
    }

    assert_eq!(snapshot(&set), before);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_distinct_latin1_words_do_not_match() {
    let mut a = WordSet::new();
    a.load(&mut MemoryLineSource::new("a", [&b"caf\xe9"[..], &b"\xe9t\xe9"[..]]))
        .expect("load");
    assert_eq!(a.len(), 1);

    let mut c = WordSet::new();
    let stats = a
        .filter_into(
            &mut MemoryLineSource::new("b", [&b"caf\xe8"[..], &b"caf\xe9"[..], &b"cafe"[..]]),
            &mut c,
        )
        .expect("filter");
    assert_eq!(stats.matched, 1);
    assert_eq!(c.iter().collect::<Vec<_>>(), vec![&b"caf\xe9"[..]]);
}

#[test]
fn test_words_land_in_their_letter_bucket() {
    let mut gen = WordGen::new(11);
    let mut set = WordSet::new();
    for word in gen.words(3_000) {
        set.insert(word);
    }
    for (letter, bucket) in set.buckets() {
        for word in bucket {
            let first = word[0].to_ascii_lowercase();
            assert_eq!((first - b'a') as usize, letter.index(), "word {:?}", word);
        }
    }
}

#[test]
fn test_sort_all_orders_buckets_and_preserves_contents() {
    let mut gen = WordGen::new(3);
    let mut set = WordSet::new();
    for _ in 0..1_500 {
        set.insert(gen.common_word());
        set.insert(gen.word());
    }
    let before = snapshot(&set);

    set.sort_all();
    let after = snapshot(&set);

    for (pre, post) in before.iter().zip(after.iter()) {
        assert!(is_sorted(post));
        assert_eq!(
            multiset(pre.iter().map(Vec::as_slice)),
            multiset(post.iter().map(Vec::as_slice))
        );
    }
}

#[test]
fn test_sort_all_is_idempotent() {
    let mut gen = WordGen::new(5);
    let mut set = WordSet::new();
    for w in gen.words(800) {
        set.insert(w);
    }
    set.sort_all();
    let once = snapshot(&set);
    set.sort_all();
    assert_eq!(snapshot(&set), once);
}

#[test]
fn test_intersection_keeps_filter_order_per_bucket() {
    let mut a = WordSet::new();
    a.load(&mut MemoryLineSource::new("a", ["apple", "banana", "apple"]))
        .expect("load");

    let mut c = WordSet::new();
    let stats = a
        .filter_into(&mut MemoryLineSource::new("b", ["banana", "cherry", "apple"]), &mut c)
        .expect("filter");

    assert_eq!(stats.matched, 2);
    let before_sort: Vec<&[u8]> = c.iter().collect();
    assert_eq!(before_sort, vec![&b"apple"[..], &b"banana"[..]]);
    assert_eq!(c.bucket(Letter::of_word(b"a").unwrap()).len(), 1);
    assert_eq!(c.bucket(Letter::of_word(b"b").unwrap()).len(), 1);
    assert!(!c.contains("cherry"));
}

#[test]
fn test_filter_duplicates_follow_filter_list_not_reference() {
    let mut a = WordSet::new();
    a.insert("cat");

    let mut c = WordSet::new();
    a.filter_into(&mut MemoryLineSource::new("b", ["cat", "cat", "cat"]), &mut c)
        .expect("filter");
    assert_eq!(c.len(), 3);

    // Repeats in the reference list do not multiply matches.
    let mut a2 = WordSet::new();
    a2.insert("cat");
    a2.insert("cat");
    let mut c2 = WordSet::new();
    a2.filter_into(&mut MemoryLineSource::new("b", ["cat"]), &mut c2)
        .expect("filter");
    assert_eq!(c2.len(), 1);
}

#[test]
fn test_bucket_capacity_follows_doubling() {
    let mut set = WordSet::new();
    for i in 0..37 {
        set.insert(format!("m{i}"));
    }
    let bucket = set.bucket(Letter::of_word(b"m").unwrap());
    assert_eq!(bucket.len(), 37);
    assert_eq!(bucket.capacity(), 64);
    assert_eq!(set.reallocations(), 7);
}
