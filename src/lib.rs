//! # Bucket Map
//!
//! A Rust implementation of a self-growing bucketed hash table with amortized O(1)
//! insertion.
//!
//! The table is built from three layers:
//!
//! - [`Bucket`]: an unordered list of key-value pairs searched linearly
//! - [`BucketArray`]: a fixed number of buckets addressed by `hash(key) % capacity`
//! - [`GrowableMap`]: a bucket array that doubles and rehashes whenever it holds as
//!   many entries as it has buckets
//!
//! Because the table grows geometrically, the total work of `n` adds is `O(n)`: with
//! the default configuration, `n` adds for `n` a power of two cost exactly `2n - 2`
//! units of work (see [`GrowthStats`]).
//!
//! ## Basic Usage
//!
//! ```rust
//! use bucketmap::{Error, GrowableMap};
//!
//! // Create a new map with 2 buckets
//! let mut map = GrowableMap::new();
//!
//! // Add values
//! map.add("apple".to_string(), 1);
//! map.add("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Ok(&1));
//!
//! // Update values
//! map.add("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Ok(&10));
//! assert_eq!(map.size(), 2);
//!
//! // Missing keys are an error
//! assert_eq!(map.get("cherry"), Err(Error::KeyNotFound));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use bucketmap::{Config, GrowableMap};
//!
//! let config = Config::new().initial_capacity(16).growth_factor(4);
//! let mut map = GrowableMap::with_config(config)?;
//!
//! for i in 0..17 {
//!     map.add(i, i * i);
//! }
//! assert_eq!(map.capacity(), 64);
//! # Ok::<(), bucketmap::Error>(())
//! ```
//!
//! ## Shared Usage
//!
//! ```rust
//! use bucketmap::SharedMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(SharedMap::new());
//!
//! let map1 = Arc::clone(&map);
//! let map2 = Arc::clone(&map);
//!
//! let t1 = thread::spawn(move || {
//!     for i in 0..100 {
//!         map1.add(format!("key-{}", i), i);
//!     }
//! });
//!
//! let t2 = thread::spawn(move || {
//!     for i in 100..200 {
//!         map2.add(format!("key-{}", i), i);
//!     }
//! });
//!
//! t1.join().unwrap();
//! t2.join().unwrap();
//!
//! assert_eq!(map.len(), 200);
//! ```

/// Module implementing the linearly searched bucket
mod bucket;
/// Module implementing the fixed-size array of buckets
mod bucket_array;
/// Map configuration
mod config;
/// Error type
mod error;
/// Module implementing the growable hash map
mod map;
/// Bucket occupancy summaries
mod occupancy;
/// Module implementing the lock-protected map
mod shared;

pub use bucket::Bucket;
pub use bucket_array::{BucketArray, Iter};
pub use config::Config;
pub use error::{Error, Result};
pub use map::{GrowableMap, GrowthStats};
pub use occupancy::OccupancyReport;
pub use shared::SharedMap;

/// Hasher builder used when none is given: deterministic `SipHash` with fixed keys
pub type DefaultHashBuilder = std::hash::BuildHasherDefault<std::hash::DefaultHasher>;
