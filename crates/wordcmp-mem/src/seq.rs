//! Append-only sequence with capacity doubling.
//!
//! Capacity starts at 0 and becomes `max(1, 2 * capacity)` whenever a push finds
//! the buffer full. On growth the elements are moved into a fresh buffer and the
//! old one is released, so after `n` pushes the capacity is the smallest power of
//! two `>= n`.

use std::borrow::Borrow;
use std::ops::Index;
use std::slice;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct GrowVec<T> {
    buf: Vec<T>,
    capacity: usize,
    reallocations: usize,
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowVec<T> {
    /// Empty sequence; allocates nothing until the first push.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
            reallocations: 0,
        }
    }

    /// Append `value` as the new last element.
    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.capacity {
            self.grow();
        }
        self.buf.push(value);
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity * 2
        };

        let mut next = Vec::with_capacity(new_capacity);
        next.extend(self.buf.drain(..));
        // Old buffer is dropped here.
        self.buf = next;
        self.capacity = new_capacity;
        self.reallocations += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            capacity = new_capacity,
            len = self.buf.len(),
            "grow"
        );
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Logical capacity (the doubling schedule, not the allocator's rounding).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffer growths performed so far.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.buf.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.buf.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Mutable view for in-place reordering. Length cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Linear scan for an element equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.buf.iter().any(|item| item.borrow() == value)
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        for item in iter {
            seq.push(item);
        }
        seq
    }
}
