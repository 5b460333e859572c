//! ResponseCache port - persistent (key -> raw response) store
//!
//! Entries are write-once; nothing in the pipeline invalidates them.

use std::path::PathBuf;

use crate::domain::value_objects::CacheKey;

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache operation errors
#[derive(Debug)]
pub enum CacheError {
    /// An entry exists but cannot be decoded
    Corrupted { path: PathBuf, message: String },
    /// The store could not be read or written
    Access { path: PathBuf, message: String },
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::Corrupted { path, message } => {
                write!(f, "corrupted cache entry {}: {}", path.display(), message)
            }
            CacheError::Access { path, message } => {
                write!(f, "cannot access cache at {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// Abstract response cache
pub trait ResponseCache {
    /// Stored response for `key`, or `None` on a miss
    fn get(&self, key: &CacheKey) -> CacheResult<Option<String>>;

    /// Store `response` under `key`
    fn put(&self, key: &CacheKey, response: &str) -> CacheResult<()>;
}

impl<T: ResponseCache + ?Sized> ResponseCache for &T {
    fn get(&self, key: &CacheKey) -> CacheResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &CacheKey, response: &str) -> CacheResult<()> {
        (**self).put(key, response)
    }
}
