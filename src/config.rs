//! Construction parameters for a [`GrowableMap`](crate::GrowableMap)

use crate::{Error, Result};
use std::num::NonZeroUsize;

/// Default number of buckets of a new map, and the default growth factor
pub(crate) const TWO: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

/// Map configuration
///
/// The map resizes whenever it holds as many entries as it has buckets, multiplying the
/// bucket count by the growth factor. Growth must be geometric for insertion to stay
/// amortized O(1), so the factor is at least 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of buckets the map starts with
    pub(crate) initial_capacity: usize,

    /// Factor the bucket count is multiplied by on resize
    pub(crate) growth_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { initial_capacity: TWO.get(), growth_factor: TWO.get() }
    }
}

impl Config {
    /// Creates the default configuration: 2 buckets, doubling on resize
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets the map starts with.
    ///
    /// Default = 2
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the factor the bucket count is multiplied by on resize.
    ///
    /// Default = 2
    #[must_use]
    pub fn growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Checks the configuration can build a map
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] for a zero initial capacity and
    /// [`Error::InvalidGrowthFactor`] for a growth factor below 2.
    pub fn validate(&self) -> Result<()> {
        self.checked().map(|_| ())
    }

    /// Returns the validated initial capacity and growth factor
    pub(crate) fn checked(&self) -> Result<(NonZeroUsize, NonZeroUsize)> {
        let capacity = NonZeroUsize::new(self.initial_capacity)
            .ok_or(Error::InvalidCapacity(self.initial_capacity))?;

        let factor = NonZeroUsize::new(self.growth_factor)
            .filter(|factor| *factor >= TWO)
            .ok_or(Error::InvalidGrowthFactor(self.growth_factor))?;

        Ok((capacity, factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.initial_capacity, 2);
        assert_eq!(config.growth_factor, 2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = Config::new().initial_capacity(16).growth_factor(4);
        let (capacity, factor) = config.checked().unwrap();
        assert_eq!(capacity.get(), 16);
        assert_eq!(factor.get(), 4);
    }

    #[test]
    fn test_zero_capacity() {
        let config = Config::new().initial_capacity(0);
        assert_eq!(config.validate(), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_non_geometric_growth() {
        assert_eq!(Config::new().growth_factor(0).validate(), Err(Error::InvalidGrowthFactor(0)));
        assert_eq!(Config::new().growth_factor(1).validate(), Err(Error::InvalidGrowthFactor(1)));
        assert_eq!(Config::new().growth_factor(3).validate(), Ok(()));
    }
}
