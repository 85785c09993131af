//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! # Examples
//!
//! ```
//! use cacherno::config::LfuCacheConfig;
//! use cacherno::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 100 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config).unwrap();
//! assert_eq!(cache.cap().get(), 100);
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// LFU tracks the frequency of access for each item and evicts
/// the least frequently used item when the cache reaches capacity.
/// Ties are broken by recency within the frequency.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold. Must be non-zero.
    pub capacity: usize,
}

impl LfuCacheConfig {
    /// Checks the configuration and returns the capacity as a `NonZeroUsize`.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn validate(&self) -> Result<NonZeroUsize, CacheError> {
        super::validate_capacity(self.capacity)
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lfu_config_creation() {
        let config = LfuCacheConfig { capacity: 100 };
        assert_eq!(config.capacity, 100);
        assert_eq!(config.validate().unwrap().get(), 100);
    }

    #[test]
    fn test_lfu_config_rejects_zero() {
        let config = LfuCacheConfig { capacity: 0 };
        assert_eq!(config.validate(), Err(CacheError::InvalidCapacity));
    }
}
