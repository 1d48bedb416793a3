use crate::{
    BucketArray, Config, DefaultHashBuilder, Result,
    bucket_array::Iter,
    config::TWO,
};
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
    mem,
    num::NonZeroUsize,
};

/// Counters describing the work a map has done so far.
///
/// One unit of work is one entry placed into a bucket, either by an `add` call or by
/// a resize moving an existing entry into the new bucket array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Number of `add` calls
    pub adds: usize,
    /// Number of times the bucket array was replaced by a larger one
    pub resizes: usize,
    /// Number of entries moved during resizes
    pub rehashed: usize,
}

impl GrowthStats {
    /// Total units of work: every add plus every rehashed entry
    #[must_use]
    pub fn work(&self) -> usize {
        self.adds.saturating_add(self.rehashed)
    }

    /// Average units of work per add
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn work_per_add(&self) -> f64 {
        if self.adds == 0 {
            return 0.0;
        }
        self.work() as f64 / self.adds as f64
    }
}

/// A hash table that grows geometrically to keep buckets short.
///
/// Entries live in a [`BucketArray`]. Whenever the map holds as many entries as it has
/// buckets, the next `add` replaces the array with one `growth_factor` times larger
/// and moves every entry over. Each resize is linear, but the resizes get rarer as
/// the map grows, so the total work for `n` adds is O(n) and `add` is amortized O(1).
///
/// Note: This implementation is not thread-safe. For shared access, use
/// [`SharedMap`](crate::SharedMap).
#[derive(Debug, Clone)]
pub struct GrowableMap<K, V, S = DefaultHashBuilder> {
    /// The current bucket array
    table: BucketArray<K, V, S>,
    /// Number of entries across all buckets
    count: usize,
    /// Factor the bucket count is multiplied by on resize
    growth_factor: NonZeroUsize,
    /// Work counters
    stats: GrowthStats,
}

impl<K, V> Default for GrowableMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> GrowableMap<K, V> {
    /// Creates an empty map with 2 buckets that doubles on resize
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(TWO, TWO, DefaultHashBuilder::default())
    }

    /// Creates an empty map with `capacity` buckets that doubles on resize
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(Config::new().initial_capacity(capacity))
    }

    /// Creates an empty map from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, see [`Config::validate`].
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> GrowableMap<K, V, S> {
    /// Creates an empty map from a configuration, addressing buckets with `hash_builder`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, see [`Config::validate`].
    pub fn with_config_and_hasher(config: Config, hash_builder: S) -> Result<Self> {
        let (capacity, growth_factor) = config.checked()?;
        Ok(Self::from_parts(capacity, growth_factor, hash_builder))
    }

    /// Creates an empty map from validated parameters
    fn from_parts(capacity: NonZeroUsize, growth_factor: NonZeroUsize, hash_builder: S) -> Self {
        log::trace!("Creating map with {capacity} buckets, growth factor {growth_factor}");

        Self {
            table: BucketArray::from_parts(capacity, hash_builder),
            count: 0,
            growth_factor,
            stats: GrowthStats::default(),
        }
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn size(&self) -> usize {
        self.count
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of buckets in the current bucket array
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the average number of entries per bucket
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Returns the work counters accumulated since the map was created
    #[must_use]
    pub fn stats(&self) -> GrowthStats {
        self.stats
    }

    /// Returns the current bucket array
    #[must_use]
    pub fn buckets(&self) -> &BucketArray<K, V, S> {
        &self.table
    }

    /// Returns an iterator over the key-value pairs, in no particular order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.table.all_entries()
    }

    /// Recomputes the entry count from the buckets
    ///
    /// A panic in a key's `Hash` during a resize drops the entries that were not yet
    /// moved, leaving the count too high. Callers that keep using a map after such a
    /// panic restore the count with this.
    pub(crate) fn recount(&mut self) {
        self.count = self.table.all_entries().count();
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        self.table.clear();
        self.count = 0;
    }
}

impl<K, V, S> GrowableMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Clone,
{
    /// Adds a key-value pair, returning the previous value if the key was present
    ///
    /// If the map holds as many entries as it has buckets, the bucket array is grown
    /// first. Adding an existing key replaces its value and leaves the size unchanged.
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        if self.count >= self.capacity() {
            self.resize();
        }

        self.stats.adds = self.stats.adds.saturating_add(1);

        let previous = self.table.add(key, value);
        if previous.is_none() {
            self.count = self.count.saturating_add(1);
        }
        previous
    }

    /// Retrieves the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the key is not stored.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get(key)
    }

    /// Get a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get_mut(key)
    }

    /// Returns true if the map stores `key`
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_ok()
    }

    /// Removes the entry for `key`, returning its value
    ///
    /// The map never shrinks, so the capacity is left as is.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.table.remove(key)?;
        self.count = self.count.saturating_sub(1);
        Some(value)
    }

    /// Replaces the bucket array with one `growth_factor` times larger and rehashes
    /// every entry into it
    ///
    /// If hashing a key panics, the entries not yet moved are lost.
    fn resize(&mut self) {
        let grown = self.table.grown(self.growth_factor);
        log::debug!(
            "Resizing map from {} to {} buckets ({} entries)",
            self.table.capacity(),
            grown.capacity(),
            self.count,
        );

        let old = mem::replace(&mut self.table, grown);
        for (key, value) in old.into_entries() {
            self.table.find_bucket_mut(&key).add(key, value);
            self.stats.rehashed = self.stats.rehashed.saturating_add(1);
        }

        self.stats.resizes = self.stats.resizes.saturating_add(1);
    }
}

impl<K, V, S> Extend<(K, V)> for GrowableMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for GrowableMap<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, S> IntoIterator for &'a GrowableMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
