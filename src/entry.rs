//! Unified Cache Entry Type
//!
//! This module provides the `CacheEntry<K, V, M>` structure stored by both
//! cache policies. The generic `M` parameter carries policy-specific
//! metadata without affecting the core entry structure.
//!
//! | Policy | Metadata |
//! |--------|----------|
//! | LRU    | `()`: position in the recency list is implicit |
//! | LFU    | [`LfuMeta`](crate::meta::LfuMeta): access frequency |
//!
//! Link fields are not part of the entry. They live in the arena node that
//! owns it (see the `list` module), so an entry can only ever sit in one list.
//!
//! # Examples
//!
//! ```
//! use cacherno::entry::CacheEntry;
//! use cacherno::meta::LfuMeta;
//!
//! let entry: CacheEntry<&str, i32> = CacheEntry::new("key", 42);
//! assert_eq!(entry.key, "key");
//! assert_eq!(entry.value, 42);
//!
//! let entry = CacheEntry::with_metadata("key", 42, LfuMeta::new(1));
//! assert_eq!(entry.metadata.frequency, 1);
//! ```

use core::fmt;
use core::mem;

/// A cached key-value pair plus policy-specific metadata.
#[derive(Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V, M = ()> {
    /// The cached key
    pub key: K,

    /// The cached value
    pub value: V,

    /// Policy-specific metadata (`()` for LRU, frequency for LFU).
    pub metadata: M,
}

impl<K, V> CacheEntry<K, V, ()> {
    /// Creates a new cache entry without policy-specific metadata.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            metadata: (),
        }
    }
}

impl<K, V, M> CacheEntry<K, V, M> {
    /// Creates a new cache entry with policy-specific metadata.
    #[inline]
    pub fn with_metadata(key: K, value: V, metadata: M) -> Self {
        Self {
            key,
            value,
            metadata,
        }
    }

    /// Swaps in a new value and returns the old one.
    #[inline]
    pub fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning the key-value pair.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, M: fmt::Debug> fmt::Debug for CacheEntry<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("metadata", &self.metadata)
            .finish()
    }
}
