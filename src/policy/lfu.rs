//! # LFU (Least Frequently Used) Cache
//!
//! A fixed-capacity key/value cache that evicts the entry with the lowest
//! access count, breaking ties by recency. Reads and writes are O(1).
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                          LfuCache<K, V>                                  │
//!   │                                                                          │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │  FrequencyBuckets<K, V>                                            │ │
//!   │   │                                                                    │ │
//!   │   │   key index:    FxHashMap<K, SlotId>                               │ │
//!   │   │   entries:      SlotArena<{key, value, freq, prev, next}>          │ │
//!   │   │   bucket index: FxHashMap<freq, {head, tail, prev, next}>          │ │
//!   │   │   min_freq:     lowest live bucket                                 │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   │                                                                          │
//!   │   capacity: usize  (maximum entries, fixed)                              │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Path
//!
//! ```text
//!   put(key, value)
//!        │
//!        ▼
//!   key present? ── YES ──► replace value, promote f → f+1, done
//!        │
//!        NO
//!        ▼
//!   capacity == 0? ── YES ──► drop the write, done
//!        │
//!        NO
//!        ▼
//!   len == capacity? ── YES ──► evict tail of bucket(min_freq)
//!        │
//!        ▼
//!   insert at MRU end of bucket(1), min_freq = 1
//! ```
//!
//! ## Frequency Lifecycle
//!
//! ```text
//!   put(new key)            ──►  freq = 1
//!   get / put(existing key) ──►  freq += 1, moved to MRU end of the new bucket
//!   eviction / remove       ──►  entry gone
//! ```
//!
//! Frequencies never decay. A key that is hammered early stays resident until
//! something else overtakes it.
//!
//! ## Tie-Breaking
//!
//! ```text
//!   capacity = 2
//!   put(1, A)   freq: {1:1}
//!   put(2, B)   freq: {1:1, 2:1}    bucket(1) = [2, 1]   (MRU → LRU)
//!   get(1)      freq: {1:2, 2:1}    bucket(1) = [2], bucket(2) = [1]
//!   put(3, C)   evict 2             bucket(1) = [3], bucket(2) = [1]
//! ```
//!
//! ## Core Operations
//!
//! | Method                 | Complexity | Description                             |
//! |------------------------|------------|-----------------------------------------|
//! | `new(capacity)`        | O(1)       | Create cache with given capacity        |
//! | `put(k, v)`            | O(1)       | Insert or update, may evict one entry   |
//! | `insert(k, v)`         | O(1)       | Like `put`, returns the replaced value  |
//! | `get(&k)`              | O(1)       | Read and promote                        |
//! | `peek(&k)`             | O(1)       | Read without promoting                  |
//! | `remove(&k)`           | O(1)       | Remove entry by key                     |
//! | `pop_lfu()`            | O(1)       | Remove and return the eviction victim   |
//! | `peek_lfu()`           | O(1)       | Inspect the eviction victim             |
//! | `frequency(&k)`        | O(1)       | Current access count                    |
//! | `clear()`              | O(n)       | Remove all entries                      |
//!
//! ## Thread Safety
//!
//! `LfuCache` is not internally synchronized. Every mutating call takes
//! `&mut self`; share it behind a single `Mutex` when needed so a whole
//! get/put runs under one lock.
//!
//! ## Example
//!
//! ```
//! use lfukit::policy::lfu::LfuCache;
//! use lfukit::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! assert_eq!(cache.get(&"a"), Some(&1)); // "a" now at freq 2
//! cache.put("c", 3);                     // evicts "b"
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.frequency(&"a"), Some(2));
//! assert_eq!(cache.frequency(&"c"), Some(1));
//! ```

use std::hash::Hash;

use tracing::{debug, trace};

use crate::builder::capacity_from_signed;
use crate::ds::frequency_buckets::{BucketKeyIter, DEFAULT_BUCKET_PREALLOC, FrequencyBuckets};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LfuMetricsReadRecorder, LfuMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

/// LFU cache with recency tie-breaking.
///
/// See the module-level documentation for details.
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    buckets: FrequencyBuckets<K, V>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is valid: every write is silently dropped.
    pub fn new(capacity: usize) -> Self {
        Self::with_bucket_hint(capacity, DEFAULT_BUCKET_PREALLOC)
    }

    /// Creates a cache and pre-sizes the bucket index for `bucket_hint`
    /// distinct frequencies.
    pub fn with_bucket_hint(capacity: usize, bucket_hint: usize) -> Self {
        debug!(capacity, bucket_hint, "creating lfu cache");
        LfuCache {
            buckets: FrequencyBuckets::with_capacity_and_bucket_hint(capacity, bucket_hint),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        }
    }

    /// Fallible constructor for capacities that arrive as signed integers
    /// (config files, FFI, user input).
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// assert!(LfuCache::<u32, u32>::try_with_capacity(0).is_ok());
    /// assert!(LfuCache::<u32, u32>::try_with_capacity(-1).is_err());
    /// ```
    pub fn try_with_capacity(capacity: i64) -> Result<Self, ConfigError> {
        Ok(Self::new(capacity_from_signed(capacity)?))
    }

    /// Inserts or updates `key`, discarding any replaced value.
    ///
    /// Updating an existing key counts as an access and bumps its frequency.
    #[inline]
    pub fn put(&mut self, key: K, value: V) {
        let _ = CoreCache::insert(self, key, value);
    }

    /// Returns the value for `key` without counting an access.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.buckets.get(key)
    }

    /// Lowest frequency currently held, `None` when empty.
    pub fn min_frequency(&self) -> Option<u64> {
        self.buckets.min_freq()
    }

    /// Keys sharing frequency `freq`, most recently touched first.
    pub fn bucket_keys(&self, freq: u64) -> BucketKeyIter<'_, K, V> {
        self.buckets.iter_bucket_keys(freq)
    }

    /// Validates capacity accounting and the bucket structure.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.buckets.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.buckets.len(),
                self.capacity
            )));
        }
        self.buckets.check_invariants()
    }

    fn evict_min_freq(&mut self) -> Option<(K, V)> {
        let freq = self.buckets.min_freq()?;
        let evicted = self.buckets.pop_min()?;
        trace!(freq, len = self.buckets.len(), "evicted lfu entry");
        Some(evicted)
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(slot) = self.buckets.get_mut(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = std::mem::replace(slot, value);
            self.buckets.touch(&key);
            return Some(previous);
        }

        if self.capacity == 0 {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.buckets.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some((_key, _value)) = self.evict_min_freq() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        self.buckets.insert(key, value);
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        {
            if self.buckets.contains(key) {
                self.metrics.record_get_hit();
            } else {
                self.metrics.record_get_miss();
            }
        }

        self.buckets.touch_get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.buckets.contains(key)
    }

    fn len(&self) -> usize {
        self.buckets.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.buckets.clear();
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        self.buckets.remove(key)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let result = self.evict_min_freq();

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_pop_lfu_found();
        }

        result
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lfu_call();

        let result = self.buckets.peek_min();

        #[cfg(feature = "metrics")]
        if result.is_some() {
            (&self.metrics).record_peek_lfu_found();
        }

        result
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_frequency_call();

        let result = self.buckets.frequency(key);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            (&self.metrics).record_frequency_found();
        }

        result
    }

    fn increment_frequency(&mut self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_increment_frequency_call();

        let result = self.buckets.touch(key);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_increment_frequency_found();
        }

        result
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            clear_calls: self.metrics.clear_calls,
            pop_lfu_calls: self.metrics.pop_lfu_calls,
            pop_lfu_found: self.metrics.pop_lfu_found,
            peek_lfu_calls: self.metrics.peek_lfu_calls.get(),
            peek_lfu_found: self.metrics.peek_lfu_found.get(),
            frequency_calls: self.metrics.frequency_calls.get(),
            frequency_found: self.metrics.frequency_found.get(),
            increment_frequency_calls: self.metrics.increment_frequency_calls,
            increment_frequency_found: self.metrics.increment_frequency_found,
            cache_len: self.buckets.len(),
            bucket_count: self.buckets.bucket_count(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid<K: Eq + Hash + Clone, V>(cache: &LfuCache<K, V>) {
        if let Err(err) = cache.check_invariants() {
            panic!("invariant violated: {err}");
        }
    }

    // Scenarios every LFU cache with recency tie-breaking must satisfy
    mod eviction_scenarios {
        use super::*;

        #[test]
        fn recency_breaks_frequency_ties() {
            let mut cache = LfuCache::new(2);
            cache.put(1, "A");
            cache.put(2, "B");
            assert_eq!(cache.get(&1), Some(&"A"));
            cache.put(3, "C");

            assert!(cache.contains(&1));
            assert!(!cache.contains(&2));
            assert!(cache.contains(&3));
            assert_valid(&cache);
        }

        #[test]
        fn lower_frequency_evicted_first() {
            let mut cache = LfuCache::new(2);
            cache.put(1, "A");
            cache.put(2, "B");
            cache.get(&1);
            cache.get(&1);
            cache.put(3, "C");

            assert_eq!(cache.get(&2), None);
            assert_eq!(cache.get(&1), Some(&"A"));
            assert_eq!(cache.get(&3), Some(&"C"));
        }

        #[test]
        fn frequency_wins_over_recency() {
            let mut cache = LfuCache::new(2);
            cache.put("old_hot", 1);
            cache.get(&"old_hot");
            cache.get(&"old_hot");
            cache.put("fresh", 2);
            cache.get(&"fresh");

            // "fresh" touched more recently but has lower frequency
            cache.put("newcomer", 3);
            assert!(cache.contains(&"old_hot"));
            assert!(!cache.contains(&"fresh"));
        }

        #[test]
        fn zero_capacity_drops_writes() {
            let mut cache = LfuCache::new(0);
            cache.put(1, "A");
            assert_eq!(cache.get(&1), None);
            assert_eq!(cache.len(), 0);
            assert_eq!(cache.insert(2, "B"), None);
            assert!(cache.is_empty());
            assert_eq!(cache.min_frequency(), None);
            assert_valid(&cache);
        }

        #[test]
        fn update_replaces_value_and_bumps_frequency() {
            let mut cache = LfuCache::new(3);
            cache.put(1, "A");
            cache.put(1, "B");
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.frequency(&1), Some(2));
            assert_eq!(cache.get(&1), Some(&"B"));
            assert_eq!(cache.frequency(&1), Some(3));
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn miss_on_empty_cache_is_idempotent() {
            let mut cache: LfuCache<u32, u32> = LfuCache::new(4);
            for _ in 0..3 {
                assert_eq!(cache.get(&42), None);
            }
            assert_eq!(cache.len(), 0);
            assert_eq!(cache.min_frequency(), None);
        }

        #[test]
        fn eviction_follows_min_freq_after_bucket_drains() {
            let mut cache = LfuCache::new(3);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);
            cache.get(&"a");
            cache.get(&"b");
            cache.get(&"c");
            cache.get(&"c");
            // freqs: a=2, b=2, c=3; bucket(2) = [b, a]
            assert_eq!(cache.min_frequency(), Some(2));

            cache.put("d", 4);
            assert!(!cache.contains(&"a"));
            assert_eq!(cache.min_frequency(), Some(1));
            assert_valid(&cache);
        }
    }

    mod basic_behavior {
        use super::*;

        #[test]
        fn insert_and_retrieve() {
            let mut cache = LfuCache::new(3);
            assert_eq!(cache.insert("key1".to_string(), 100), None);
            assert_eq!(cache.insert("key2".to_string(), 200), None);
            assert_eq!(cache.insert("key3".to_string(), 300), None);

            assert_eq!(cache.get(&"key1".to_string()), Some(&100));
            assert_eq!(cache.get(&"key2".to_string()), Some(&200));
            assert_eq!(cache.get(&"key3".to_string()), Some(&300));
            assert_eq!(cache.get(&"nonexistent".to_string()), None);

            assert_eq!(cache.frequency(&"key1".to_string()), Some(2));
        }

        #[test]
        fn insert_returns_replaced_value() {
            let mut cache = LfuCache::new(2);
            assert_eq!(cache.insert(1, String::from("one")), None);
            assert_eq!(cache.insert(1, String::from("uno")), Some(String::from("one")));
            assert_eq!(cache.peek(&1).map(String::as_str), Some("uno"));
        }

        #[test]
        fn update_never_evicts() {
            let mut cache = LfuCache::new(2);
            cache.put(1, 1);
            cache.put(2, 2);
            cache.put(2, 20);
            cache.put(1, 10);
            assert_eq!(cache.len(), 2);
            assert_eq!(cache.peek(&1), Some(&10));
            assert_eq!(cache.peek(&2), Some(&20));
        }

        #[test]
        fn capacity_enforced_under_churn() {
            let mut cache = LfuCache::new(2);
            for i in 0..50 {
                cache.put(i, i * 10);
                assert!(cache.len() <= cache.capacity());
            }
            assert_eq!(cache.len(), 2);
            assert!(cache.contains(&49));
        }

        #[test]
        fn peek_does_not_promote() {
            let mut cache = LfuCache::new(2);
            cache.put("a", 1);
            cache.put("b", 2);
            assert_eq!(cache.peek(&"a"), Some(&1));
            assert_eq!(cache.frequency(&"a"), Some(1));

            cache.put("c", 3);
            assert!(!cache.contains(&"a"));
        }

        #[test]
        fn contains_does_not_promote() {
            let mut cache = LfuCache::new(2);
            cache.put("a", 1);
            cache.put("b", 2);
            assert!(cache.contains(&"a"));
            cache.put("c", 3);
            assert!(!cache.contains(&"a"));
            assert!(cache.contains(&"b"));
        }

        #[test]
        fn independent_instances_share_nothing() {
            let mut first = LfuCache::new(1);
            let mut second = LfuCache::new(1);
            first.put("k", 1);
            second.put("k", 2);
            assert_eq!(first.get(&"k"), Some(&1));
            assert_eq!(second.get(&"k"), Some(&2));
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn single_item_cache() {
            let mut cache = LfuCache::new(1);
            cache.put("a", 1);
            cache.get(&"a");
            cache.get(&"a");
            cache.put("b", 2);
            assert!(!cache.contains(&"a"));
            assert_eq!(cache.frequency(&"b"), Some(1));
            assert_valid(&cache);
        }

        #[test]
        fn new_entry_resets_min_frequency() {
            let mut cache = LfuCache::new(3);
            cache.put("a", 1);
            cache.get(&"a");
            cache.get(&"a");
            assert_eq!(cache.min_frequency(), Some(3));

            cache.put("b", 2);
            assert_eq!(cache.min_frequency(), Some(1));
        }

        #[test]
        fn reinserting_evicted_key_starts_fresh() {
            let mut cache = LfuCache::new(1);
            cache.put("a", 1);
            cache.get(&"a");
            cache.put("b", 2);
            cache.put("a", 3);
            assert_eq!(cache.frequency(&"a"), Some(1));
            assert_eq!(cache.peek(&"a"), Some(&3));
        }

        #[test]
        fn negative_capacity_rejected() {
            let err = LfuCache::<u8, u8>::try_with_capacity(-3).unwrap_err();
            assert!(err.message().contains("capacity"));
            assert_eq!(
                LfuCache::<u8, u8>::try_with_capacity(3).unwrap().capacity(),
                3
            );
        }

        #[test]
        fn large_cache_operations() {
            let mut cache = LfuCache::new(1000);
            for i in 0..1000u32 {
                cache.put(i, i);
            }
            for i in 0..500u32 {
                cache.get(&i);
            }
            for i in 1000..1500u32 {
                cache.put(i, i);
            }
            assert_eq!(cache.len(), 1000);
            for i in 0..500u32 {
                assert!(cache.contains(&i), "hot key {i} was evicted");
            }
            assert_valid(&cache);
        }
    }

    mod lfu_operations {
        use super::*;

        #[test]
        fn pop_lfu_order() {
            let mut cache = LfuCache::new(4);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);
            cache.get(&"a");

            assert_eq!(cache.pop_lfu(), Some(("b", 2)));
            assert_eq!(cache.pop_lfu(), Some(("c", 3)));
            assert_eq!(cache.pop_lfu(), Some(("a", 1)));
            assert_eq!(cache.pop_lfu(), None);
            assert_valid(&cache);
        }

        #[test]
        fn peek_lfu_matches_next_victim() {
            let mut cache = LfuCache::new(3);
            assert_eq!(cache.peek_lfu(), None);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");

            assert_eq!(cache.peek_lfu(), Some((&"b", &2)));
            assert_eq!(cache.len(), 2);
            assert_eq!(cache.frequency(&"b"), Some(1));
        }

        #[test]
        fn increment_frequency_promotes() {
            let mut cache = LfuCache::new(2);
            cache.put("a", 1);
            cache.put("b", 2);
            assert_eq!(cache.increment_frequency(&"a"), Some(2));
            assert_eq!(cache.increment_frequency(&"missing"), None);

            cache.put("c", 3);
            assert!(cache.contains(&"a"));
            assert!(!cache.contains(&"b"));
        }

        #[test]
        fn remove_advances_min_frequency() {
            let mut cache = LfuCache::new(3);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"b");
            cache.get(&"b");

            assert_eq!(cache.remove(&"a"), Some(1));
            assert_eq!(cache.min_frequency(), Some(3));
            assert_eq!(cache.remove(&"a"), None);
            assert_valid(&cache);
        }

        #[test]
        fn remove_batch_preserves_order() {
            let mut cache = LfuCache::new(4);
            cache.put(1, "one");
            cache.put(2, "two");
            cache.put(3, "three");
            let removed = cache.remove_batch(&[3, 9, 1]);
            assert_eq!(removed, vec![Some("three"), None, Some("one")]);
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn bucket_keys_are_mru_first() {
            let mut cache = LfuCache::new(4);
            cache.put("a", ());
            cache.put("b", ());
            cache.put("c", ());
            cache.get(&"a");

            let ones: Vec<_> = cache.bucket_keys(1).copied().collect();
            assert_eq!(ones, vec!["c", "b"]);
            let twos: Vec<_> = cache.bucket_keys(2).copied().collect();
            assert_eq!(twos, vec!["a"]);
            assert_eq!(cache.bucket_keys(9).count(), 0);
        }

        #[test]
        fn clear_resets_all_state() {
            let mut cache = LfuCache::new(3);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");
            cache.clear();

            assert!(cache.is_empty());
            assert_eq!(cache.capacity(), 3);
            assert_eq!(cache.min_frequency(), None);
            assert_eq!(cache.peek_lfu(), None);
            assert_valid(&cache);

            cache.put("c", 3);
            assert_eq!(cache.frequency(&"c"), Some(1));
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics_counters {
        use super::*;

        #[test]
        fn snapshot_counts_hits_misses_and_evictions() {
            let mut cache = LfuCache::new(2);
            cache.put(1, 1);
            cache.put(2, 2);
            cache.put(1, 10);
            cache.get(&1);
            cache.get(&7);
            cache.put(3, 3);
            cache.peek_lfu();
            cache.frequency(&1);
            cache.pop_lfu();
            cache.increment_frequency(&1);
            cache.increment_frequency(&42);

            let snapshot = cache.snapshot();
            assert_eq!(snapshot.get_calls, 2);
            assert_eq!(snapshot.get_hits, 1);
            assert_eq!(snapshot.get_misses, 1);
            assert_eq!(snapshot.insert_calls, 4);
            assert_eq!(snapshot.insert_updates, 1);
            assert_eq!(snapshot.insert_new, 3);
            assert_eq!(snapshot.evict_calls, 1);
            assert_eq!(snapshot.evicted_entries, 1);
            assert_eq!(snapshot.peek_lfu_calls, 1);
            assert_eq!(snapshot.peek_lfu_found, 1);
            assert_eq!(snapshot.frequency_found, 1);
            assert_eq!(snapshot.pop_lfu_found, 1);
            assert_eq!(snapshot.increment_frequency_calls, 2);
            assert_eq!(snapshot.increment_frequency_found, 1);
            assert_eq!(snapshot.clear_calls, 0);
            assert_eq!(snapshot.cache_len, 1);
            assert_eq!(snapshot.bucket_count, 1);
            assert_eq!(snapshot.capacity, 2);
        }

        #[test]
        fn snapshot_counts_clears_and_tracks_bucket_gauge() {
            let mut cache = LfuCache::new(4);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");
            cache.increment_frequency(&"a");
            // a=3, b=1
            assert_eq!(cache.snapshot().bucket_count, 2);

            cache.clear();
            cache.clear();

            let snapshot = cache.snapshot();
            assert_eq!(snapshot.clear_calls, 2);
            assert_eq!(snapshot.cache_len, 0);
            assert_eq!(snapshot.bucket_count, 0);
            assert_eq!(snapshot.insert_new, 2);
        }
    }
}
