//! Frequency buckets for O(1) LFU tracking.
//!
//! Holds every cache entry together with its access frequency. Entries that
//! share a frequency live in one bucket, ordered by recency, and the buckets
//! themselves are chained in ascending frequency order so the minimum can be
//! followed without scanning.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      FrequencyBuckets<K, V> Layout                          │
//! │                                                                             │
//! │   ┌─────────────────────────────┐   ┌─────────────────────────────────┐     │
//! │   │  index: FxHashMap<K, SlotId>│   │  entries: SlotArena<Entry<K,V>> │     │
//! │   │                             │   │                                 │     │
//! │   │  ┌───────────┬──────────┐   │   │  ┌──────┬───────────────────┐   │     │
//! │   │  │    Key    │  SlotId  │   │   │  │ Slot │ Entry             │   │     │
//! │   │  ├───────────┼──────────┤   │   │  ├──────┼───────────────────┤   │     │
//! │   │  │  "page_a" │   id_0   │───┼───┼─►│ id_0 │ freq:2, value, ⇄  │   │     │
//! │   │  │  "page_b" │   id_1   │───┼───┼─►│ id_1 │ freq:1, value, ⇄  │   │     │
//! │   │  │  "page_c" │   id_2   │───┼───┼─►│ id_2 │ freq:1, value, ⇄  │   │     │
//! │   │  └───────────┴──────────┘   │   │  └──────┴───────────────────┘   │     │
//! │   └─────────────────────────────┘   └─────────────────────────────────┘     │
//! │                                                                             │
//! │   ┌───────────────────────────────────────────────────────────────────┐     │
//! │   │  buckets: FxHashMap<u64, Bucket>  (frequency → recency list)      │     │
//! │   │                                                                   │     │
//! │   │  min_freq = 1                                                     │     │
//! │   │       │                                                           │     │
//! │   │       ▼                                                           │     │
//! │   │  freq=1: head ──► [id_2] ◄──► [id_1] ◄── tail                     │     │
//! │   │                     MRU          LRU (evict first)                │     │
//! │   │                                                                   │     │
//! │   │  freq=2: head ──► [id_0] ◄── tail                                 │     │
//! │   │                                                                   │     │
//! │   │  Bucket links: freq=1 ──next──► freq=2                            │     │
//! │   │                freq=2 ◄──prev── freq=1                            │     │
//! │   └───────────────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Promotion (`touch`)
//! ───────────────────
//!
//! 1. Look up the slot in `index`
//! 2. Unlink it from bucket(f)
//! 3. If bucket(f) is now empty, drop it and advance `min_freq` if it pointed there
//! 4. Create bucket(f+1) if needed, linked between its neighbours
//! 5. Push the slot to the MRU end of bucket(f+1)
//!
//! Eviction (`pop_min`)
//! ────────────────────
//!
//! 1. Use `min_freq` to find the lowest bucket
//! 2. Unlink its tail (least recently touched at that frequency)
//! 3. Drop the bucket if empty; `min_freq` follows the bucket's `next` link
//! 4. Remove the entry from `index` and the arena and hand back `(key, value)`
//!
//! ## Operations
//!
//! | Operation    | Time | Notes                                     |
//! |--------------|------|-------------------------------------------|
//! | `insert`     | O(1) | New key starts at freq=1                  |
//! | `touch`      | O(1) | Increment frequency, move to MRU          |
//! | `remove`     | O(1) | Unlink, drop empty bucket                 |
//! | `pop_min`    | O(1) | Tail of the `min_freq` bucket             |
//! | `frequency`  | O(1) | Current frequency of a key                |
//! | `clear`      | O(n) | Drops every entry                         |
//!
//! ## Example
//!
//! ```
//! use lfukit::ds::FrequencyBuckets;
//!
//! let mut freq = FrequencyBuckets::new();
//! freq.insert("page_a", 10);
//! freq.insert("page_b", 20);
//! freq.insert("page_c", 30);
//!
//! freq.touch(&"page_a"); // freq=2
//! freq.touch(&"page_a"); // freq=3
//!
//! // Lowest frequency, least recently touched among ties.
//! assert_eq!(freq.pop_min(), Some(("page_b", 20)));
//! ```

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

/// Link pointers (prev/next) are accessed on every touch/evict operation,
/// so they're placed first.
#[derive(Debug)]
struct Entry<K, V> {
    prev: Option<SlotId>,
    next: Option<SlotId>,
    freq: u64,
    key: K,
    value: V,
}

#[derive(Debug, Default)]
struct Bucket {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    prev: Option<u64>,
    next: Option<u64>,
}

/// Default bucket pre-allocation. Most entries cluster at low frequencies.
pub const DEFAULT_BUCKET_PREALLOC: usize = 32;

/// O(1) LFU store with recency tie-breaking within a frequency.
///
/// Owns keys and values. Every entry sits in exactly one bucket whose
/// frequency matches the entry's own; empty buckets are never retained.
///
/// # Example
///
/// ```
/// use lfukit::ds::FrequencyBuckets;
///
/// let mut freq = FrequencyBuckets::new();
/// freq.insert("a", 1);
/// freq.insert("b", 2);
/// freq.touch(&"a");
///
/// assert_eq!(freq.frequency(&"a"), Some(2));
/// assert_eq!(freq.frequency(&"b"), Some(1));
/// assert_eq!(freq.min_freq(), Some(1));
/// assert_eq!(freq.peek_min(), Some((&"b", &2)));
/// ```
#[derive(Debug)]
pub struct FrequencyBuckets<K, V> {
    entries: SlotArena<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    buckets: FxHashMap<u64, Bucket>,
    min_freq: u64,
}

impl<K, V> FrequencyBuckets<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: SlotArena::new(),
            index: FxHashMap::default(),
            buckets: FxHashMap::default(),
            min_freq: 0,
        }
    }

    /// Creates an empty store with room for `capacity` entries.
    ///
    /// Uses [`DEFAULT_BUCKET_PREALLOC`] for the bucket map.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_bucket_hint(capacity, DEFAULT_BUCKET_PREALLOC)
    }

    /// Creates an empty store with reserved space for entries and buckets.
    ///
    /// `bucket_hint` is the expected number of distinct live frequencies.
    pub fn with_capacity_and_bucket_hint(capacity: usize, bucket_hint: usize) -> Self {
        Self {
            entries: SlotArena::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: FxHashMap::with_capacity_and_hasher(bucket_hint, Default::default()),
            min_freq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of live buckets (distinct frequencies currently in use).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(|entry| entry.freq)
    }

    /// Returns the minimum frequency currently present.
    ///
    /// ```
    /// use lfukit::ds::FrequencyBuckets;
    ///
    /// let mut freq = FrequencyBuckets::new();
    /// assert_eq!(freq.min_freq(), None);
    ///
    /// freq.insert("a", ());
    /// freq.touch(&"a");
    /// assert_eq!(freq.min_freq(), Some(2));
    /// ```
    pub fn min_freq(&self) -> Option<u64> {
        if self.min_freq == 0 {
            None
        } else {
            Some(self.min_freq)
        }
    }

    /// Returns the value for `key` without changing its frequency.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Returns the value for `key` mutably without changing its frequency.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = *self.index.get(key)?;
        self.entries.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Peeks the eviction candidate (tail of the min-frequency bucket).
    pub fn peek_min(&self) -> Option<(&K, &V)> {
        if self.min_freq == 0 {
            return None;
        }
        let id = self.buckets.get(&self.min_freq)?.tail?;
        let entry = self.entries.get(id)?;
        Some((&entry.key, &entry.value))
    }

    /// Iterates the keys of one bucket, most recently touched first.
    ///
    /// ```
    /// use lfukit::ds::FrequencyBuckets;
    ///
    /// let mut freq = FrequencyBuckets::new();
    /// freq.insert("a", ());
    /// freq.insert("b", ());
    /// freq.insert("c", ());
    /// freq.touch(&"b");
    ///
    /// let ones: Vec<_> = freq.iter_bucket_keys(1).copied().collect();
    /// assert_eq!(ones, vec!["c", "a"]);
    /// ```
    pub fn iter_bucket_keys(&self, freq: u64) -> BucketKeyIter<'_, K, V> {
        let head = self.buckets.get(&freq).and_then(|bucket| bucket.head);
        BucketKeyIter {
            entries: &self.entries,
            current: head,
        }
    }

    /// Inserts a new key with frequency 1 at the MRU end of bucket 1.
    ///
    /// Returns `false` and leaves the store untouched if the key already
    /// exists; `value` is dropped in that case.
    ///
    /// ```
    /// use lfukit::ds::FrequencyBuckets;
    ///
    /// let mut freq = FrequencyBuckets::new();
    /// assert!(freq.insert("a", 1));
    /// assert!(!freq.insert("a", 2));
    /// assert_eq!(freq.get(&"a"), Some(&1));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let id = self.entries.insert(Entry {
            prev: None,
            next: None,
            freq: 1,
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        if !self.buckets.contains_key(&1) {
            let next = self.min_freq();
            self.insert_bucket(1, None, next);
        }

        self.list_push_front(1, id);
        self.min_freq = 1;
        true
    }

    /// Increments the frequency of `key` and returns the new frequency.
    ///
    /// The entry moves to the MRU end of its new bucket. At `u64::MAX` the
    /// frequency saturates and the entry is only moved to the MRU end.
    #[inline]
    pub fn touch(&mut self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.promote(id)
    }

    /// Promotes `key` and returns its value in one lookup.
    #[inline]
    pub fn touch_get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.promote(id)?;
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Removes `key`, returning its value.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let freq = self.entries.get(id)?.freq;
        self.detach(freq, id)?;
        self.entries.remove(id).map(|entry| entry.value)
    }

    /// Removes and returns the eviction candidate.
    ///
    /// ```
    /// use lfukit::ds::FrequencyBuckets;
    ///
    /// let mut freq = FrequencyBuckets::new();
    /// freq.insert("a", 1);
    /// freq.insert("b", 2);
    /// freq.insert("c", 3);
    /// freq.touch(&"c");
    ///
    /// assert_eq!(freq.pop_min(), Some(("a", 1)));
    /// assert_eq!(freq.pop_min(), Some(("b", 2)));
    /// assert_eq!(freq.pop_min(), Some(("c", 3)));
    /// assert_eq!(freq.pop_min(), None);
    /// ```
    #[inline]
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let freq = self.min_freq;
        if freq == 0 {
            return None;
        }

        let id = self.buckets.get(&freq)?.tail?;
        self.detach(freq, id)?;

        let entry = self.entries.remove(id)?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.buckets.clear();
        self.min_freq = 0;
    }

    /// Walks every bucket and checks the structural invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.entries.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "entry count {} does not match index size {}",
                self.entries.len(),
                self.index.len()
            )));
        }

        if self.is_empty() {
            if !self.buckets.is_empty() {
                return Err(InvariantError::new("empty store still holds buckets"));
            }
            if self.min_freq != 0 {
                return Err(InvariantError::new("empty store has a min_freq"));
            }
            return Ok(());
        }

        match self.buckets.keys().min() {
            Some(&lowest) if lowest == self.min_freq => {},
            lowest => {
                return Err(InvariantError::new(format!(
                    "min_freq {} but lowest bucket is {:?}",
                    self.min_freq, lowest
                )));
            },
        }

        let mut linked = 0usize;
        for (&freq, bucket) in &self.buckets {
            match bucket.prev {
                Some(prev) => {
                    let prev_bucket = self.buckets.get(&prev).ok_or_else(|| {
                        InvariantError::new(format!("bucket {freq} links to missing prev {prev}"))
                    })?;
                    if prev >= freq || prev_bucket.next != Some(freq) {
                        return Err(InvariantError::new(format!(
                            "bucket chain broken between {prev} and {freq}"
                        )));
                    }
                },
                None if freq != self.min_freq => {
                    return Err(InvariantError::new(format!(
                        "bucket {freq} has no prev but min_freq is {}",
                        self.min_freq
                    )));
                },
                None => {},
            }
            if let Some(next) = bucket.next {
                let next_bucket = self.buckets.get(&next).ok_or_else(|| {
                    InvariantError::new(format!("bucket {freq} links to missing next {next}"))
                })?;
                if next <= freq || next_bucket.prev != Some(freq) {
                    return Err(InvariantError::new(format!(
                        "bucket chain broken between {freq} and {next}"
                    )));
                }
            }

            let mut current = bucket.head;
            let mut last = None;
            let mut count = 0usize;
            while let Some(id) = current {
                let entry = self
                    .entries
                    .get(id)
                    .ok_or_else(|| InvariantError::new(format!("bucket {freq} holds a freed slot")))?;
                if entry.freq != freq {
                    return Err(InvariantError::new(format!(
                        "entry with freq {} filed under bucket {freq}",
                        entry.freq
                    )));
                }
                if entry.prev != last {
                    return Err(InvariantError::new(format!(
                        "back link mismatch in bucket {freq}"
                    )));
                }
                if self.index.get(&entry.key) != Some(&id) {
                    return Err(InvariantError::new(format!(
                        "bucket {freq} entry is not indexed at its slot"
                    )));
                }
                last = Some(id);
                current = entry.next;
                count += 1;
                if count > self.entries.len() {
                    return Err(InvariantError::new(format!("cycle in bucket {freq}")));
                }
            }
            if count == 0 {
                return Err(InvariantError::new(format!("bucket {freq} is empty")));
            }
            if bucket.tail != last {
                return Err(InvariantError::new(format!("tail mismatch in bucket {freq}")));
            }
            linked += count;
        }

        if linked != self.entries.len() {
            return Err(InvariantError::new(format!(
                "{linked} entries linked into buckets but {} stored",
                self.entries.len()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("frequency buckets invariant violated: {err}");
        }
    }

    fn promote(&mut self, id: SlotId) -> Option<u64> {
        let current_freq = self.entries.get(id)?.freq;
        if current_freq == u64::MAX {
            self.list_remove(current_freq, id)?;
            self.list_push_front(current_freq, id);
            return Some(current_freq);
        }
        let next_freq = current_freq + 1;

        let (prev_freq, next_existing) = {
            let bucket = self.buckets.get(&current_freq)?;
            (bucket.prev, bucket.next)
        };

        self.list_remove(current_freq, id)?;
        let bucket_empty = self.bucket_is_empty(current_freq);

        if bucket_empty {
            self.remove_bucket(current_freq, prev_freq, next_existing);
            if self.min_freq == current_freq {
                self.min_freq = next_existing.unwrap_or(0);
            }
        }

        if !self.buckets.contains_key(&next_freq) {
            let prev = if bucket_empty {
                prev_freq
            } else {
                Some(current_freq)
            };
            self.insert_bucket(next_freq, prev, next_existing);
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.freq = next_freq;
        }
        self.list_push_front(next_freq, id);
        if self.min_freq == 0 || next_freq < self.min_freq {
            self.min_freq = next_freq;
        }

        Some(next_freq)
    }

    /// Unlinks `id` from bucket(`freq`), dropping the bucket if it empties.
    fn detach(&mut self, freq: u64, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let bucket = self.buckets.get(&freq)?;
            (bucket.prev, bucket.next)
        };
        self.list_remove(freq, id)?;

        if self.bucket_is_empty(freq) {
            self.remove_bucket(freq, prev, next);
            if self.min_freq == freq {
                self.min_freq = next.unwrap_or(0);
            }
        }
        Some(())
    }

    fn bucket_is_empty(&self, freq: u64) -> bool {
        self.buckets
            .get(&freq)
            .map(|bucket| bucket.head.is_none())
            .unwrap_or(true)
    }

    fn insert_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.insert(
            freq,
            Bucket {
                head: None,
                tail: None,
                prev,
                next,
            },
        );

        if let Some(prev) = prev
            && let Some(prev_bucket) = self.buckets.get_mut(&prev)
        {
            prev_bucket.next = Some(freq);
        }
        if let Some(next) = next
            && let Some(next_bucket) = self.buckets.get_mut(&next)
        {
            next_bucket.prev = Some(freq);
        }
    }

    fn remove_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        if let Some(prev) = prev
            && let Some(prev_bucket) = self.buckets.get_mut(&prev)
        {
            prev_bucket.next = next;
        }
        if let Some(next) = next
            && let Some(next_bucket) = self.buckets.get_mut(&next)
        {
            next_bucket.prev = prev;
        }
        self.buckets.remove(&freq);
    }

    fn list_push_front(&mut self, freq: u64, id: SlotId) {
        let bucket = self.buckets.get_mut(&freq).expect("bucket missing");

        let old_head = bucket.head;
        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = old_head;
        }
        if let Some(old_head) = old_head {
            if let Some(entry) = self.entries.get_mut(old_head) {
                entry.prev = Some(id);
            }
        } else {
            bucket.tail = Some(id);
        }
        bucket.head = Some(id);
    }

    fn list_remove(&mut self, freq: u64, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let entry = self.entries.get(id)?;
            (entry.prev, entry.next)
        };

        let bucket = self.buckets.get_mut(&freq)?;
        if let Some(prev) = prev {
            if let Some(entry) = self.entries.get_mut(prev) {
                entry.next = next;
            }
        } else {
            bucket.head = next;
        }
        if let Some(next) = next {
            if let Some(entry) = self.entries.get_mut(next) {
                entry.prev = prev;
            }
        } else {
            bucket.tail = prev;
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = None;
        }

        Some(())
    }

    #[cfg(test)]
    fn force_freq(&mut self, key: &K, freq: u64) {
        let id = self.index[key];
        let old = self.entries.get(id).unwrap().freq;
        self.detach(old, id).unwrap();
        let next = self.buckets.keys().copied().filter(|&f| f > freq).min();
        let prev = self.buckets.keys().copied().filter(|&f| f < freq).max();
        if !self.buckets.contains_key(&freq) {
            self.insert_bucket(freq, prev, next);
        }
        self.entries.get_mut(id).unwrap().freq = freq;
        self.list_push_front(freq, id);
        if self.min_freq == 0 || freq < self.min_freq {
            self.min_freq = freq;
        }
    }
}

/// Iterator over the keys of one frequency bucket, MRU to LRU.
///
/// Created by [`FrequencyBuckets::iter_bucket_keys`].
pub struct BucketKeyIter<'a, K, V> {
    entries: &'a SlotArena<Entry<K, V>>,
    current: Option<SlotId>,
}

impl<'a, K, V> Iterator for BucketKeyIter<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let entry = self.entries.get(id)?;
        self.current = entry.next;
        Some(&entry.key)
    }
}

impl<K, V> Default for FrequencyBuckets<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
