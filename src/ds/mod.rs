pub mod frequency_buckets;
pub mod slot_arena;

pub use frequency_buckets::{BucketKeyIter, DEFAULT_BUCKET_PREALLOC, FrequencyBuckets};
pub use slot_arena::{SlotArena, SlotId};
