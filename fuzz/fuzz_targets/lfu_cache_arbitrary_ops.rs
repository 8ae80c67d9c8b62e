#![no_main]

use libfuzzer_sys::fuzz_target;
use lfukit::policy::lfu::LfuCache;
use lfukit::traits::{CoreCache, LfuCacheTrait, MutableCache};

// Arbitrary get/put/remove/pop_lfu sequences against a small cache. The
// first byte picks the capacity so zero and one are both exercised.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 9);
    let mut cache: LfuCache<u8, u8> = LfuCache::new(capacity);

    for chunk in ops.chunks_exact(3) {
        let key = chunk[1];
        let value = chunk[2];

        match chunk[0] % 6 {
            0 => {
                let victim = cache.peek_lfu().map(|(k, _)| *k);
                let was_present = cache.contains(&key);
                let was_full = cache.len() == capacity;
                cache.put(key, value);
                if capacity == 0 {
                    assert!(cache.is_empty());
                } else {
                    assert_eq!(cache.peek(&key), Some(&value));
                    if !was_present && was_full
                        && let Some(victim) = victim
                    {
                        assert!(!cache.contains(&victim));
                    }
                }
            },
            1 => {
                let before = cache.frequency(&key);
                let hit = cache.get(&key).is_some();
                assert_eq!(hit, before.is_some());
                if let Some(f) = before {
                    assert_eq!(cache.frequency(&key), Some(f.saturating_add(1)));
                }
            },
            2 => {
                let _ = cache.remove(&key);
                assert!(!cache.contains(&key));
            },
            3 => {
                let expected = cache.peek_lfu().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_lfu(), expected);
            },
            4 => {
                let _ = cache.increment_frequency(&key);
            },
            5 => {
                if value == 0 {
                    cache.clear();
                }
            },
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        cache.check_invariants().unwrap();
    }
});
