//! Response cache implementations

mod disk;

pub use disk::{CacheStats, DiskCache};
