use crate::{Error, Result};
use std::{borrow::Borrow, mem};

/// A key-value pair stored in a bucket
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
}

/// An unordered list of key-value pairs searched linearly.
///
/// Every operation scans the entries in insertion order, so its cost is proportional
/// to the length of the bucket. A bucket holds at most one entry per key: adding a
/// key that is already present replaces its value in place.
#[derive(Debug, Clone)]
pub struct Bucket<K, V> {
    /// The entries in insertion order
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Default for Bucket<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty bucket
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the number of entries in the bucket
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bucket has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the key-value pairs in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the key-value pair at `index` in insertion order
    pub(crate) fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get(index).map(|entry| (&entry.key, &entry.value))
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Consumes the bucket, yielding its key-value pairs in insertion order
    pub fn into_entries(self) -> impl Iterator<Item = (K, V)> {
        self.entries.into_iter().map(|entry| (entry.key, entry.value))
    }
}

impl<K: Eq, V> Bucket<K, V> {
    /// Position of the entry holding `key`
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|entry| entry.key.borrow() == key)
    }

    /// Adds a key-value pair, returning the previous value if the key was already present
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        self.entries.push(Entry { key, value });
        None
    }

    /// Retrieves the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no entry has the key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
            .ok_or(Error::KeyNotFound)
    }

    /// Get a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Removes the entry for `key`, returning its value
    ///
    /// Entries are unordered, so the last entry takes the removed slot.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.position(key)?;
        Some(self.entries.swap_remove(index).value)
    }

    /// Returns true if the bucket holds an entry for `key`
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }
}
