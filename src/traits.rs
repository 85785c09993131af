//! The contract shared by every cache policy.
//!
//! [`LruCache`](crate::LruCache) and [`LfuCache`](crate::LfuCache) both
//! implement [`Cache`], so code that only needs `get`/`add`/`remove` can be
//! written once and handed either policy at construction time:
//!
//! ```
//! use cacherno::{AddOutcome, Cache, LfuCache, LruCache};
//!
//! fn warm<C: Cache<u32, String>>(cache: &C) {
//!     for id in 0..4 {
//!         cache.add(id, format!("user-{id}"));
//!     }
//! }
//!
//! let lru = LruCache::new(2).unwrap();
//! let lfu = LfuCache::new(2).unwrap();
//! warm(&lru);
//! warm(&lfu);
//! assert_eq!(lru.len(), 2);
//! assert_eq!(lfu.len(), 2);
//! assert_eq!(lru.add(3, "again".to_string()), AddOutcome::Rewritten);
//! ```

use core::borrow::Borrow;
use core::hash::Hash;
use core::num::NonZeroUsize;

/// What an `add` call did to the cache.
///
/// The two flags reported by [`evicted`](AddOutcome::evicted) and
/// [`rewritten`](AddOutcome::rewritten) can never both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOutcome {
    /// A new key was stored and the cache had spare room.
    Inserted,
    /// A new key was stored and exactly one other entry was evicted for it.
    Evicted,
    /// The key was already present; its value was replaced and it was promoted.
    Rewritten,
}

impl AddOutcome {
    /// `true` when another entry was evicted to make room.
    #[inline]
    pub fn evicted(self) -> bool {
        matches!(self, AddOutcome::Evicted)
    }

    /// `true` when an existing entry was overwritten.
    #[inline]
    pub fn rewritten(self) -> bool {
        matches!(self, AddOutcome::Rewritten)
    }
}

/// Operations every bounded cache in this crate supports.
///
/// All methods take `&self`: implementations serialize access internally,
/// so a cache can be shared across threads behind an `Arc`. Lookups promote
/// the entry they hit, which makes `get` a write like any other.
pub trait Cache<K, V> {
    /// Returns a clone of the value for `key`, promoting the entry on a hit.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Stores `value` under `key`.
    ///
    /// An existing key has its value replaced and is promoted exactly as
    /// [`get`](Cache::get) would. A new key at full capacity evicts one entry
    /// chosen by the policy before it is stored.
    fn add(&self, key: K, value: V) -> AddOutcome;

    /// Drops `key` if present. Never evicts anything else.
    fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Number of entries currently stored.
    fn len(&self) -> usize;

    /// `true` when nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    fn cap(&self) -> NonZeroUsize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_flags_are_exclusive() {
        assert!(!AddOutcome::Inserted.evicted());
        assert!(!AddOutcome::Inserted.rewritten());
        assert!(AddOutcome::Evicted.evicted());
        assert!(!AddOutcome::Evicted.rewritten());
        assert!(!AddOutcome::Rewritten.evicted());
        assert!(AddOutcome::Rewritten.rewritten());
    }
}
