//! A seeded Bloom filter.
//!
//! A [`ClassicalBloomFilter`] keeps `m` packed bits and probes them with one
//! fast hash (xxh3) evaluated under `k` random seeds. Added items are always
//! reported as possibly present; items never added are usually reported as
//! absent, with a false positive rate that grows with the load.
//!
//! ```
//! use seeded_bloom::{ClassicalBloomFilter, Filter};
//!
//! let mut bf = ClassicalBloomFilter::with_seed(100, 5, 42).unwrap();
//! bf.add("apple");
//! assert!(bf.might_contain("apple"));
//! assert!(!bf.might_contain("banana"));
//! ```
//!
//! Items are identified by their canonical bytes (see [`Item`]), so `42u32`
//! and `"42"` are the same item.
//!
//! `add` takes `&mut self` and `might_contain` takes `&self`; wrap the filter
//! in a `RwLock` to share it between threads.

mod bloom_filters;
pub mod error;
mod item;

pub use bloom_filters::{
    suggest_hash_count, suggest_size, BloomFilterBuilder, ClassicalBloomFilter, Filter,
    DEFAULT_HASH_COUNT, DEFAULT_SIZE,
};
pub use error::{FilterError, Result};
pub use item::Item;
