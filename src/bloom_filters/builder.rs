use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::bloom_filters::{suggest_hash_count, suggest_size, ClassicalBloomFilter};
use crate::error::Result;

pub const DEFAULT_SIZE: usize = 1024;
pub const DEFAULT_HASH_COUNT: usize = 8;

/// Builder for [`ClassicalBloomFilter`].
///
/// The shape comes either from [`with_size`](Self::with_size) (explicit bit
/// count and hash count) or from [`with_accuracy`](Self::with_accuracy)
/// (expected items and target false positive rate). Seeds are random unless
/// [`seed`](Self::seed) pins them.
///
/// ```
/// use seeded_bloom::{BloomFilterBuilder, Filter};
///
/// let mut filter = BloomFilterBuilder::with_accuracy(1_000, 0.01)
///     .seed(42)
///     .build()
///     .unwrap();
/// filter.add("apple");
/// assert!(filter.might_contain("apple"));
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    size: usize,
    hash_count: usize,
    seed: Option<u64>,
}

impl Default for BloomFilterBuilder {
    fn default() -> Self {
        Self::with_size(DEFAULT_SIZE, DEFAULT_HASH_COUNT)
    }
}

impl BloomFilterBuilder {
    /// Shape is validated by [`build`](Self::build), not here.
    pub fn with_size(size: usize, hash_count: usize) -> Self {
        Self {
            size,
            hash_count,
            seed: None,
        }
    }

    /// Sizes the filter for `max_items` distinct items at a false positive
    /// rate of about `fpp`.
    ///
    /// # Panics
    ///
    /// Panics if `max_items` is 0 or `fpp` is not in `(0.0, 1.0)`.
    pub fn with_accuracy(max_items: usize, fpp: f64) -> Self {
        assert!(max_items > 0, "max_items must be greater than 0");
        assert!(
            fpp > 0.0 && fpp < 1.0,
            "fpp must be between 0.0 and 1.0 (exclusive)"
        );

        let size = suggest_size(max_items, fpp);
        Self::with_size(size, suggest_hash_count(size, max_items))
    }

    /// Pins the seed generator, making the built filter reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<ClassicalBloomFilter> {
        match self.seed {
            Some(seed) => self.build_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => self.build_with_rng(&mut thread_rng()),
        }
    }

    /// Draws the seeds from `rng`, ignoring any pinned [`seed`](Self::seed).
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<ClassicalBloomFilter> {
        ClassicalBloomFilter::with_rng(self.size, self.hash_count, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom_filters::Filter;
    use crate::error::FilterError;

    #[test]
    fn default_shape() {
        let bf = BloomFilterBuilder::default().build().unwrap();
        assert_eq!(bf.size(), DEFAULT_SIZE);
        assert_eq!(bf.hash_count(), DEFAULT_HASH_COUNT);
    }

    #[test]
    fn pinned_seed_is_reproducible() {
        let a = BloomFilterBuilder::with_size(512, 6).seed(99).build().unwrap();
        let b = BloomFilterBuilder::with_size(512, 6).seed(99).build().unwrap();
        assert_eq!(a.seeds(), b.seeds());
        assert_eq!(a.indices_for("apple"), b.indices_for("apple"));
    }

    #[test]
    fn caller_rng_drives_seeds() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = BloomFilterBuilder::with_size(64, 3)
            .build_with_rng(&mut rng)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let b = ClassicalBloomFilter::with_rng(64, 3, &mut rng).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn accuracy_shape() {
        let bf = BloomFilterBuilder::with_accuracy(1000, 0.01)
            .build()
            .unwrap();
        assert!(bf.size() > 9000 && bf.size() < 10000);
        assert_eq!(bf.hash_count(), 7);
    }

    #[test]
    fn invalid_shape_surfaces_on_build() {
        let err = BloomFilterBuilder::with_size(0, 2).seed(1).build().unwrap_err();
        assert_eq!(err, FilterError::InvalidSize { size: 0 });
    }

    #[test]
    #[should_panic(expected = "fpp must be between")]
    fn accuracy_rejects_certain_fpp() {
        BloomFilterBuilder::with_accuracy(10, 1.0);
    }
}
