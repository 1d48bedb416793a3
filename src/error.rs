//! Errors returned by the map and its building blocks

/// Represents errors that can occur when building or querying a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested key is not stored in the map
    KeyNotFound,

    /// A bucket array was requested with a non-positive number of buckets
    InvalidCapacity(usize),

    /// The growth factor would not grow the table geometrically (it must be at least 2)
    InvalidGrowthFactor(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "key not found"),
            Self::InvalidCapacity(capacity) => {
                write!(f, "invalid capacity {capacity}, must be at least 1")
            }
            Self::InvalidGrowthFactor(factor) => {
                write!(f, "invalid growth factor {factor}, must be at least 2")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Map result
pub type Result<T> = std::result::Result<T, Error>;
