#![no_main]

use libfuzzer_sys::fuzz_target;
use lfukit::ds::FrequencyBuckets;

// Arbitrary insert/touch/remove/pop_min sequences against FrequencyBuckets,
// validating the full structure after every step.
fuzz_target!(|data: &[u8]| {
    let mut buckets: FrequencyBuckets<u8, u32> = FrequencyBuckets::new();

    for chunk in data.chunks_exact(3) {
        let op = chunk[0] % 8;
        let key = chunk[1];
        let value = u32::from(chunk[2]);
        let before = buckets.frequency(&key);

        match op {
            0 => {
                let inserted = buckets.insert(key, value);
                assert_eq!(inserted, before.is_none());
                if inserted {
                    assert_eq!(buckets.min_freq(), Some(1));
                }
            },
            1 => {
                let after = buckets.touch(&key);
                assert_eq!(after, before.map(|f| f.saturating_add(1)));
            },
            2 => {
                let removed = buckets.remove(&key);
                assert_eq!(removed.is_some(), before.is_some());
                assert!(!buckets.contains(&key));
            },
            3 => {
                let min = buckets.min_freq();
                let popped = buckets.pop_min();
                assert_eq!(popped.is_some(), min.is_some());
            },
            4 => {
                let peeked = buckets.peek_min().map(|(k, _)| *k);
                if let Some(k) = peeked {
                    assert_eq!(buckets.frequency(&k), buckets.min_freq());
                }
            },
            5 => {
                let _ = buckets.touch_get(&key);
            },
            6 => {
                let freq = u64::from(chunk[2] % 4);
                let keys: Vec<u8> = buckets.iter_bucket_keys(freq).copied().collect();
                for k in keys {
                    assert_eq!(buckets.frequency(&k), Some(freq));
                }
            },
            7 => buckets.clear(),
            _ => unreachable!(),
        }

        buckets.check_invariants().unwrap();
        assert_eq!(buckets.is_empty(), buckets.min_freq().is_none());
    }
});
