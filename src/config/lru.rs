//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Sizing
//!
//! `capacity` is a plain entry count. Every live entry costs one arena slot
//! (key, value, two link handles) plus one index slot, so memory grows
//! linearly with `capacity` regardless of access pattern.
//!
//! # Examples
//!
//! ```
//! use cacherno::config::LruCacheConfig;
//! use cacherno::LruCache;
//!
//! let config = LruCacheConfig { capacity: 500 };
//! let cache: LruCache<&str, i32> = LruCache::init(config).unwrap();
//! assert_eq!(cache.len(), 0);
//!
//! // Zero entries is not a cache
//! assert!(LruCache::<&str, i32>::init(LruCacheConfig { capacity: 0 }).is_err());
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed item when the cache reaches capacity.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold. Must be non-zero.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Checks the configuration and returns the capacity as a `NonZeroUsize`.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn validate(&self) -> Result<NonZeroUsize, CacheError> {
        super::validate_capacity(self.capacity)
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_config_creation() {
        let config = LruCacheConfig { capacity: 1000 };
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.validate().unwrap().get(), 1000);
    }

    #[test]
    fn test_lru_config_rejects_zero() {
        let config = LruCacheConfig { capacity: 0 };
        assert_eq!(config.validate(), Err(CacheError::InvalidCapacity));
    }
}
