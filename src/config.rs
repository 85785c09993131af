//! Cache Configuration Module
//!
//! This module provides configuration structures for the cache implementations.
//! Each cache type has its own dedicated configuration struct with public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Validated once**: The zero-capacity check happens in `validate()`, which
//!   every cache constructor calls before allocating anything
//! - **No boilerplate**: No builder methods needed
//!
//! # Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LfuCacheConfig` | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//!
//! # Examples
//!
//! ```
//! use cacherno::config::LruCacheConfig;
//! use cacherno::LruCache;
//!
//! let config = LruCacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config).unwrap();
//! assert_eq!(cache.cap().get(), 10_000);
//! ```

pub mod lfu;
pub mod lru;

pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;

use crate::error::CacheError;
use core::num::NonZeroUsize;

/// Turns a raw entry count into a usable capacity.
#[inline]
pub(crate) fn validate_capacity(capacity: usize) -> Result<NonZeroUsize, CacheError> {
    NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(0), Err(CacheError::InvalidCapacity));
        assert_eq!(validate_capacity(1).unwrap().get(), 1);
        assert_eq!(validate_capacity(usize::MAX).unwrap().get(), usize::MAX);
    }
}
