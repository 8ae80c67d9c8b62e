use lfukit::policy::lfu::LfuCache;
use lfukit::traits::{CoreCache, LfuCacheTrait};

fn main() {
    let mut cache: LfuCache<&str, String> = LfuCache::new(2);

    cache.put("a", "alpha".to_string());
    cache.put("b", "beta".to_string());

    cache.get(&"a");
    cache.put("c", "gamma".to_string());

    println!("contains a? {}", cache.contains(&"a"));
    println!("contains b? {}", cache.contains(&"b"));
    println!("freq(a) = {:?}", cache.frequency(&"a"));
    println!("freq(c) = {:?}", cache.frequency(&"c"));
}

// Expected output:
// contains a? true
// contains b? false
// freq(a) = Some(2)
// freq(c) = Some(1)
//
// capacity=2; "a" is read before "c" arrives, so "b" is the only entry at
// frequency 1 and gets evicted.
