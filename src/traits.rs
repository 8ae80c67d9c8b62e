//! # Cache Traits
//!
//! The operation surface of [`LfuCache`](crate::policy::lfu::LfuCache), split
//! into layers so generic code can ask for only what it needs.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │  insert / get / contains / len          │
//!   │  is_empty / capacity / clear            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │  remove / remove_batch                  │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           LfuCacheTrait<K, V>           │
//!   │  pop_lfu / peek_lfu / frequency         │
//!   │  increment_frequency                    │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! Eviction order is deliberately *not* part of `CoreCache`: a recency-only
//! cache and a frequency cache break ties differently, and callers that care
//! about the victim go through [`LfuCacheTrait`].

/// Operations every cache supports.
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is full and `key` is new, exactly one entry is evicted
    /// first.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::traits::CoreCache;
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// assert_eq!(cache.insert(1, "first"), None);
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// May update eviction state. Use [`contains`](Self::contains) to test
    /// presence without side effects.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    fn clear(&mut self);
}

/// Caches that allow arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key, returning its value if it was present.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::traits::{CoreCache, MutableCache};
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.insert(1, "value");
    ///
    /// assert_eq!(cache.remove(&1), Some("value"));
    /// assert_eq!(cache.remove(&1), None);
    /// ```
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes several keys, returning results in input order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// Frequency-aware operations.
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least frequently used entry.
    ///
    /// Among entries of equal frequency the least recently touched one goes
    /// first. Returns `None` if the cache is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::traits::{CoreCache, LfuCacheTrait};
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    /// cache.get(&1);
    ///
    /// assert_eq!(cache.pop_lfu(), Some((2, "second")));
    /// ```
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Peeks at the next eviction victim without touching it.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Current access frequency of `key`, or `None` if absent.
    ///
    /// ```
    /// use lfukit::traits::{CoreCache, LfuCacheTrait};
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.insert(1, "value");
    /// assert_eq!(cache.frequency(&1), Some(1));
    ///
    /// cache.get(&1);
    /// assert_eq!(cache.frequency(&1), Some(2));
    /// assert_eq!(cache.frequency(&99), None);
    /// ```
    fn frequency(&self, key: &K) -> Option<u64>;

    /// Promotes `key` by one without reading it; returns the new frequency.
    fn increment_frequency(&mut self, key: &K) -> Option<u64>;
}
