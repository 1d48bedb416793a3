use crate::{Bucket, DefaultHashBuilder, Error, Result};
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
    num::NonZeroUsize,
};

/// A fixed number of buckets addressed by the hash of the key.
///
/// A key always lives in the bucket at `hash(key) % capacity`. Keys that are equal hash
/// equally and land in the same bucket; unequal keys may collide and share a bucket,
/// where the bucket's linear scan tells them apart.
#[derive(Debug, Clone)]
pub struct BucketArray<K, V, S = DefaultHashBuilder> {
    /// The buckets, always exactly `capacity` of them
    buckets: Box<[Bucket<K, V>]>,
    /// Number of buckets
    capacity: NonZeroUsize,
    /// Builds the hasher used to pick a bucket
    hash_builder: S,
}

impl<K, V> BucketArray<K, V> {
    /// Creates `capacity` empty buckets using the default hasher
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> BucketArray<K, V, S> {
    /// Creates `capacity` empty buckets that are addressed with `hash_builder`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(Error::InvalidCapacity(capacity))?;
        Ok(Self::from_parts(capacity, hash_builder))
    }

    /// Creates `capacity` empty buckets
    pub(crate) fn from_parts(capacity: NonZeroUsize, hash_builder: S) -> Self {
        let buckets = (0..capacity.get()).map(|_| Bucket::new()).collect();
        Self { buckets, capacity, hash_builder }
    }

    /// Creates an empty array `factor` times as large that hashes the same way
    pub(crate) fn grown(&self, factor: NonZeroUsize) -> Self
    where
        S: Clone,
    {
        Self::from_parts(self.capacity.saturating_mul(factor), self.hash_builder.clone())
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of entries in each bucket, in bucket order
    #[must_use]
    pub fn occupancy(&self) -> Vec<usize> {
        self.buckets.iter().map(Bucket::len).collect()
    }

    /// Returns an iterator over every key-value pair, bucket by bucket
    #[must_use]
    pub fn all_entries(&self) -> Iter<'_, K, V> {
        Iter { buckets: &self.buckets, bucket: 0, entry: 0 }
    }

    /// Consumes the array, yielding every key-value pair bucket by bucket
    pub fn into_entries(self) -> impl Iterator<Item = (K, V)> {
        self.buckets.into_vec().into_iter().flat_map(Bucket::into_entries)
    }

    /// Empties every bucket, keeping the capacity
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
    }
}

impl<K, V, S> BucketArray<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Gets the index of the bucket responsible for `key`
    #[allow(clippy::cast_possible_truncation)]
    fn index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        (hash as usize) % self.capacity
    }

    /// Returns the bucket responsible for `key`
    #[allow(clippy::indexing_slicing)]
    pub fn find_bucket<Q>(&self, key: &Q) -> &Bucket<K, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // index < capacity == buckets.len()
        &self.buckets[self.index(key)]
    }

    /// Returns the bucket responsible for `key` for modification
    #[allow(clippy::indexing_slicing)]
    pub fn find_bucket_mut<Q>(&mut self, key: &Q) -> &mut Bucket<K, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index(key);
        &mut self.buckets[index]
    }

    /// Adds a key-value pair to its bucket, returning the previous value for the key
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        self.find_bucket_mut(&key).add(key, value)
    }

    /// Retrieves the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not stored.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_bucket(key).get(key)
    }

    /// Get a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_bucket_mut(key).get_mut(key)
    }

    /// Removes the entry for `key`, returning its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_bucket_mut(key).remove(key)
    }
}

/// Iterator over the key-value pairs of a bucket array
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The buckets being walked
    buckets: &'a [Bucket<K, V>],
    /// Index of the current bucket
    bucket: usize,
    /// Index of the next entry in the current bucket
    entry: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.buckets.get(self.bucket) {
            if let Some(pair) = bucket.entry_at(self.entry) {
                self.entry = self.entry.saturating_add(1);
                return Some(pair);
            }
            self.bucket = self.bucket.saturating_add(1);
            self.entry = 0;
        }
        None
    }
}
