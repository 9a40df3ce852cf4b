use bit_vec::BitVec;
use rand::Rng;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::bloom_filters::{BloomFilterBuilder, Filter};
use crate::error::{FilterError, Result};
use crate::item::Item;

/// A Bloom filter over a packed bit array, probed by one hash function
/// evaluated under `hash_count` independent seeds.
///
/// Seeds are drawn once at construction and never change, so queries on an
/// unmodified filter are deterministic. They are not deduplicated: two equal
/// seeds land on the same bit and the filter behaves as if `k` were smaller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicalBloomFilter {
    /// number of bits in a Bloom filter
    m: usize,
    /// one seed per hash function
    seeds: Vec<u32>,

    storage: BitVec,
}

impl ClassicalBloomFilter {
    /// Creates a filter of `size` bits probed by `hash_count` hash functions,
    /// seeded from the thread-local RNG.
    ///
    /// Fails with [`FilterError::InvalidSize`] when `size` is 0, then
    /// [`FilterError::InvalidHashCount`] when `hash_count` is 0, then
    /// [`FilterError::HashCountExceedsSize`] when `hash_count > size`.
    pub fn new(size: usize, hash_count: usize) -> Result<Self> {
        BloomFilterBuilder::with_size(size, hash_count).build()
    }

    /// Same as [`new`](Self::new), but the seeds are derived from `seed`, so
    /// two filters built with the same arguments are identical.
    pub fn with_seed(size: usize, hash_count: usize, seed: u64) -> Result<Self> {
        BloomFilterBuilder::with_size(size, hash_count)
            .seed(seed)
            .build()
    }

    /// Same as [`new`](Self::new), drawing the seeds from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(size: usize, hash_count: usize, rng: &mut R) -> Result<Self> {
        if let Err(err) = Self::validate(size, hash_count) {
            debug!(size, hash_count, %err, "rejected bloom filter shape");
            return Err(err);
        }
        let seeds = (0..hash_count).map(|_| rng.gen::<u32>()).collect();
        debug!(size, hash_count, "created bloom filter");
        Ok(Self {
            m: size,
            seeds,
            storage: BitVec::from_elem(size, false),
        })
    }

    fn validate(size: usize, hash_count: usize) -> Result<()> {
        if size < 1 {
            return Err(FilterError::InvalidSize { size });
        }
        if hash_count < 1 {
            return Err(FilterError::InvalidHashCount { hash_count });
        }
        if hash_count > size {
            return Err(FilterError::HashCountExceedsSize { hash_count, size });
        }
        Ok(())
    }

    pub fn seeds(&self) -> &[u32] {
        &self.seeds
    }

    /// The bit positions probed for `item`, one per seed and in seed order.
    /// Duplicates are kept.
    pub fn indices_for<T: Item + ?Sized>(&self, item: &T) -> Vec<usize> {
        let bytes = item.canonical_bytes();
        self.indices(&bytes).collect()
    }

    fn indices<'a>(&'a self, value: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        probe(&self.seeds, self.m, value)
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.storage.iter().filter(|bit| *bit).count()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.none()
    }

    /// Fraction of bits set, in `[0, 1]`.
    pub fn load(&self) -> f64 {
        self.count_ones() as f64 / self.m as f64
    }

    /// Chance that a never-added item is reported as present, given the
    /// current load: load^k.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.load().powi(self.seeds.len() as i32)
    }
}

// idx_i = xxh3(value, seed_i) mod m
fn probe<'a>(seeds: &'a [u32], m: usize, value: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    let m = m as u64;
    seeds
        .iter()
        .map(move |&seed| (xxh3_64_with_seed(value, u64::from(seed)) % m) as usize)
}

impl Filter for ClassicalBloomFilter {
    fn add<T: Item + ?Sized>(&mut self, item: &T) {
        let bytes = item.canonical_bytes();
        for idx in probe(&self.seeds, self.m, &bytes) {
            self.storage.set(idx, true);
        }
    }

    fn might_contain<T: Item + ?Sized>(&self, item: &T) -> bool {
        let bytes = item.canonical_bytes();
        for idx in self.indices(&bytes) {
            if self.storage.get(idx) == Some(false) {
                return false;
            }
        }
        true
    }

    fn size(&self) -> usize {
        self.m
    }

    fn hash_count(&self) -> usize {
        self.seeds.len()
    }
}
