use thiserror::Error;

/// Errors raised while constructing a filter. Once a filter exists, none of
/// its operations can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("size must be at least 1, got {size}")]
    InvalidSize { size: usize },

    #[error("hash count must be at least 1, got {hash_count}")]
    InvalidHashCount { hash_count: usize },

    #[error("hash count {hash_count} exceeds size {size}")]
    HashCountExceedsSize { hash_count: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, FilterError>;
