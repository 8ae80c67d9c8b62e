//! lfukit: a constant-time LFU cache that breaks frequency ties by recency.
//!
//! Entries are grouped into per-frequency buckets; each bucket is a recency
//! list. Eviction takes the least recently touched entry from the lowest
//! non-empty frequency. `get`, `put` and eviction are all O(1).
//!
//! ```
//! use lfukit::prelude::*;
//!
//! let mut cache = LfuCache::new(2);
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.get(&1);
//! cache.put(3, "three"); // evicts 2
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! ```

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod traits;
