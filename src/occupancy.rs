//! Bucket occupancy summaries, showing how evenly the hash spreads keys

use crate::BucketArray;

/// How the entries of a bucket array are spread over its buckets.
///
/// With a well-distributed hash and a load factor of at most 1, most buckets hold
/// zero, one or two entries and the longest bucket stays short. A long tail in the
/// histogram points at a poor hash for the key type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyReport {
    /// `histogram[len]` is the number of buckets holding exactly `len` entries
    histogram: Vec<usize>,
    /// Number of buckets
    buckets: usize,
    /// Number of entries across all buckets
    entries: usize,
}

impl OccupancyReport {
    /// Summarizes the bucket lengths of `array`
    #[must_use]
    pub fn of<K, V, S>(array: &BucketArray<K, V, S>) -> Self {
        Self::from_lengths(array.occupancy())
    }

    /// Builds a report from per-bucket lengths
    fn from_lengths(lengths: Vec<usize>) -> Self {
        let longest = lengths.iter().copied().max().unwrap_or(0);
        let mut histogram = vec![0usize; longest.saturating_add(1)];

        for &len in &lengths {
            if let Some(slot) = histogram.get_mut(len) {
                *slot = slot.saturating_add(1);
            }
        }

        Self { histogram, buckets: lengths.len(), entries: lengths.iter().sum() }
    }

    /// Number of buckets holding exactly `len` entries, indexed by `len`
    #[must_use]
    pub fn histogram(&self) -> &[usize] {
        &self.histogram
    }

    /// Length of the longest bucket, the worst-case scan of a lookup
    #[must_use]
    pub fn longest(&self) -> usize {
        self.histogram.len().saturating_sub(1)
    }

    /// Number of buckets with no entries
    #[must_use]
    pub fn empty(&self) -> usize {
        self.histogram.first().copied().unwrap_or(0)
    }

    /// Number of buckets
    #[must_use]
    pub fn buckets(&self) -> usize {
        self.buckets
    }

    /// Number of entries across all buckets
    #[must_use]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Average length of the non-empty buckets, the expected scan of a successful lookup
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_chain(&self) -> f64 {
        let used = self.buckets.saturating_sub(self.empty());
        if used == 0 {
            return 0.0;
        }
        self.entries as f64 / used as f64
    }
}

impl std::fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} entries in {} buckets ({} empty, longest {})",
            self.entries,
            self.buckets,
            self.empty(),
            self.longest(),
        )
    }
}
