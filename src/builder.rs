//! Builder for [`LfuCache`] configuration.
//!
//! Useful when cache settings come from configuration rather than code:
//! signed capacities are validated up front and the bucket pre-allocation
//! hint can be tuned without touching call sites.
//!
//! ## Example
//!
//! ```rust
//! use lfukit::builder::CacheBuilder;
//! use lfukit::traits::CoreCache;
//!
//! let mut cache = CacheBuilder::new(100).bucket_hint(8).build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::ds::DEFAULT_BUCKET_PREALLOC;
use crate::error::ConfigError;
use crate::policy::lfu::LfuCache;

/// Converts a signed capacity, separating negatives from values too large
/// for the target's `usize`.
pub(crate) fn capacity_from_signed(capacity: i64) -> Result<usize, ConfigError> {
    if capacity < 0 {
        return Err(ConfigError::new(format!(
            "capacity must be non-negative, got {capacity}"
        )));
    }
    usize::try_from(capacity).map_err(|_| {
        ConfigError::new(format!(
            "capacity {capacity} out of range, max is {}",
            usize::MAX
        ))
    })
}

/// Collects cache settings before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: usize,
    bucket_hint: usize,
}

impl CacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bucket_hint: DEFAULT_BUCKET_PREALLOC,
        }
    }

    /// Validates a signed capacity, rejecting negatives.
    ///
    /// ```
    /// use lfukit::builder::CacheBuilder;
    ///
    /// assert!(CacheBuilder::try_from_signed(16).is_ok());
    /// assert!(CacheBuilder::try_from_signed(-1).is_err());
    /// ```
    pub fn try_from_signed(capacity: i64) -> Result<Self, ConfigError> {
        Ok(Self::new(capacity_from_signed(capacity)?))
    }

    /// Expected number of distinct frequencies; sizes the bucket index.
    pub fn bucket_hint(mut self, bucket_hint: usize) -> Self {
        self.bucket_hint = bucket_hint;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn build<K, V>(self) -> LfuCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        LfuCache::with_bucket_hint(self.capacity, self.bucket_hint)
    }
}
