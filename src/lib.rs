#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Cache | Evicts | Tie-break | Best Use Case |
//! |-------|--------|-----------|---------------|
//! | [`LruCache`] | Least recently used | none (recency is a total order) | Temporal locality |
//! | [`LfuCache`] | Lowest access count | Earliest promoted at that count | Stable popularity |
//!
//! ## Performance Characteristics
//!
//! | Cache | Get | Add | Remove | Pop |
//! |-------|-----|-----|--------|-----|
//! | LRU   | O(1)| O(1)| O(1)   | O(1)|
//! | LFU   | O(1)| O(1)| O(1)*  | O(1)*|
//!
//! \* plus a scan over the distinct live frequencies when the removed entry
//! was the last one at the minimum frequency.
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! ```rust
//! use cacherno::LruCache;
//! use cacherno::config::LruCacheConfig;
//!
//! let cache = LruCache::init(LruCacheConfig { capacity: 2 }).unwrap();
//!
//! cache.add("apple", 1);
//! cache.add("banana", 2);
//! assert_eq!(cache.get(&"apple"), Some(1));
//!
//! cache.add("cherry", 3); // evicts "banana"
//! assert_eq!(cache.get(&"banana"), None);
//! ```
//!
//! ### LFU (Least Frequently Used)
//!
//! ```rust
//! use cacherno::LfuCache;
//!
//! let cache = LfuCache::new(2).unwrap();
//!
//! cache.add("rare", 1);
//! cache.add("popular", 2);
//! for _ in 0..5 {
//!     cache.get(&"popular");
//! }
//!
//! cache.add("new", 3); // evicts "rare"
//! assert_eq!(cache.get(&"popular"), Some(2));
//! assert_eq!(cache.get(&"rare"), None);
//! ```
//!
//! ### Invalid capacity
//!
//! ```rust
//! use cacherno::{CacheError, LruCache};
//!
//! let err = LruCache::<u64, u64>::new(0).unwrap_err();
//! assert_eq!(err, CacheError::InvalidCapacity);
//! assert_eq!(err.to_string(), "must provide a positive size");
//! ```
//!
//! ## Why Mutex Instead of RwLock?
//!
//! Every cache takes `&self` and guards its state with a single
//! `parking_lot::Mutex`. In both policies a `get` hit reorders the entry, so
//! a lookup is as much a write as an insert is. An `RwLock` would hand out
//! write locks for every call anyway while paying for its extra bookkeeping.
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache
//! - [`lfu`]: Least Frequently Used cache
//! - [`traits`]: the [`Cache`] trait and [`AddOutcome`]
//! - [`config`]: configuration structures
//! - [`error`]: construction errors
//! - [`entry`]: the entry type stored by every cache
//! - [`meta`]: per-policy entry metadata

#![forbid(unsafe_code)]

#[cfg(test)]
extern crate scoped_threadpool;

/// Unified cache entry type.
///
/// Provides a generic `CacheEntry<K, V, M>` holding the key, the value and
/// algorithm-specific metadata.
pub mod entry;

/// Algorithm-specific metadata types.
///
/// - `LfuMeta`: Frequency counter for LFU
pub mod meta;

/// Arena-backed doubly linked list used to order entries.
///
/// **Note**: This module is internal infrastructure and should not be used
/// directly by library consumers.
pub(crate) mod list;

/// Key-to-handle hash index.
pub(crate) mod index;

/// Cache configuration structures.
pub mod config;

/// Error type returned by cache constructors.
pub mod error;

/// Shared cache trait and the outcome of an insertion.
pub mod traits;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used items
/// when capacity is reached. Items are tracked by their access frequency.
pub mod lfu;

// Re-export cache types
pub use lfu::LfuCache;
pub use lru::LruCache;

pub use error::CacheError;
pub use traits::{AddOutcome, Cache};

// Re-export entry type
pub use entry::CacheEntry;

// Re-export metadata types
pub use meta::LfuMeta;
