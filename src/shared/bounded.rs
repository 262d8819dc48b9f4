//! Fixed-capacity list with silent truncation.
//!
//! The device builds keep every collection in a statically sized array. On a
//! host the storage is a `Vec`, but the capacity/truncation contract is kept:
//! items past capacity are dropped, never rejected with an error.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundedList<T> {
    items: Vec<T>,
    #[serde(skip)]
    capacity: usize,
}

impl<T> BoundedList<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Collect the first `capacity` items of `iter`; the rest are discarded.
    pub fn from_iter_truncated<I: IntoIterator<Item = T>>(capacity: usize, iter: I) -> Self {
        let mut list = Self::new(capacity);
        list.items.extend(iter.into_iter().take(capacity));
        list
    }

    /// Append an item. Returns `false` (and drops the item) when full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Replace the contents, truncating to capacity. Returns the number of
    /// items that did not fit.
    pub fn replace<I: IntoIterator<Item = T>>(&mut self, iter: I) -> usize {
        self.items.clear();
        let mut dropped = 0;
        for item in iter {
            if !self.push(item) {
                dropped += 1;
            }
        }
        dropped
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> IntoIterator for BoundedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
