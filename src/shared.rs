use crate::{Config, DefaultHashBuilder, GrowableMap, Result};
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
    sync::{Mutex, MutexGuard},
};

/// A [`GrowableMap`] behind a single exclusive lock.
///
/// The map itself has no internal synchronization, so every operation, including a
/// resize triggered by `add`, runs while holding the lock. Readers and writers are
/// serialized; values are handed out as clones since references cannot outlive the
/// lock guard.
#[derive(Debug)]
pub struct SharedMap<K, V, S = DefaultHashBuilder> {
    /// The wrapped map
    inner: Mutex<GrowableMap<K, V, S>>,
}

impl<K, V> Default for SharedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SharedMap<K, V> {
    /// Creates an empty shared map with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::from_map(GrowableMap::new())
    }

    /// Creates an empty shared map from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, see [`Config::validate`].
    pub fn with_config(config: Config) -> Result<Self> {
        GrowableMap::with_config(config).map(Self::from_map)
    }
}

impl<K, V, S> SharedMap<K, V, S> {
    /// Wraps an existing map
    #[must_use]
    pub fn from_map(map: GrowableMap<K, V, S>) -> Self {
        Self { inner: Mutex::new(map) }
    }

    /// Acquires the lock
    ///
    /// A holder that panicked may have been inside a resize, which loses the entries
    /// not yet moved. On a poisoned lock the entry count is rebuilt from the buckets
    /// and the poison is cleared, so later callers see a consistent map.
    fn lock(&self) -> MutexGuard<'_, GrowableMap<K, V, S>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            let mut guard = poisoned.into_inner();
            guard.recount();
            self.inner.clear_poison();
            guard
        })
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Runs `f` with exclusive access to the map
    pub fn with<R>(&self, f: impl FnOnce(&mut GrowableMap<K, V, S>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Unwraps the map
    pub fn into_inner(self) -> GrowableMap<K, V, S> {
        self.inner.into_inner().unwrap_or_else(|poisoned| {
            let mut map = poisoned.into_inner();
            map.recount();
            map
        })
    }
}

impl<K, V, S> SharedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Clone,
{
    /// Adds a key-value pair, returning the previous value if the key was present
    pub fn add(&self, key: K, value: V) -> Option<V> {
        self.lock().add(key, value)
    }

    /// Retrieves a clone of the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the key is not stored.
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    /// Returns true if the map stores `key`
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(key)
    }

    /// Removes the entry for `key`, returning its value
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(key)
    }
}
