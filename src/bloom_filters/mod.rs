mod base;
mod builder;
mod classical_bloom_filter;

pub use self::base::{suggest_hash_count, suggest_size, Filter};
pub use self::builder::{BloomFilterBuilder, DEFAULT_HASH_COUNT, DEFAULT_SIZE};
pub use self::classical_bloom_filter::ClassicalBloomFilter;
