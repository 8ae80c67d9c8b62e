//! Sharing one cache between threads behind a coarse lock.

use std::sync::{Arc, Mutex};
use std::thread;

use lfukit::builder::CacheBuilder;
use lfukit::traits::{CoreCache, LfuCacheTrait};

fn main() {
    let cache = Arc::new(Mutex::new(CacheBuilder::new(64).build::<u64, u64>()));

    let workers: Vec<_> = (0..4u64)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..1_000u64 {
                    // every worker hammers keys 0..8, plus its own cold range
                    let key = if i % 2 == 0 { i % 8 } else { 1_000 * (worker + 1) + i };
                    let mut guard = cache.lock().unwrap_or_else(|p| p.into_inner());
                    if guard.get(&key).is_none() {
                        guard.put(key, key * 10);
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    let cache = cache.lock().unwrap_or_else(|p| p.into_inner());
    println!("len = {}", cache.len());
    for key in 0..8u64 {
        println!("key {key}: freq {:?}", cache.frequency(&key));
    }
}
