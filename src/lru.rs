//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a bounded LRU cache with O(1) operations for all
//! common cache operations. LRU works on the principle of temporal locality:
//! items that have been accessed recently are likely to be accessed again soon.
//!
//! # Algorithm
//!
//! Entries sit in one doubly linked list ordered by recency. The head is the
//! most recently used entry and the tail the least recently used one.
//!
//! - `get` hit: move the entry to the head.
//! - `add` of an existing key: replace the value, move to the head.
//! - `add` of a new key at capacity: drop the tail, then insert at the head.
//! - `remove`: unlink the entry wherever it is.
//!
//! Recency totally orders the entries, so the eviction victim is never a tie.
//!
//! # Performance Characteristics
//!
//! - Get / Add / Remove: O(1)
//! - Space: O(capacity); one arena slot and one index slot per entry
//!
//! # Thread Safety
//!
//! [`LruCache`] is `Send + Sync` and takes `&self` everywhere. Every call,
//! `get` included, holds one exclusive `parking_lot::Mutex` for its whole
//! duration: a hit moves the entry to the head of the list, so a lookup
//! mutates as much shared state as an insert does.

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::index::{self, IndexMap};
use crate::list::{Arena, Handle, List};
use crate::traits::{AddOutcome, Cache};
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::num::NonZeroUsize;
use parking_lot::Mutex;
use tracing::{debug, trace};

/// Internal LRU segment containing the actual cache algorithm.
///
/// The segment is single-threaded and mutates through `&mut self`;
/// [`LruCache`] wraps it in a mutex.
pub(crate) struct LruSegment<K, V> {
    cap: NonZeroUsize,
    arena: Arena<CacheEntry<K, V>>,
    list: List,
    map: IndexMap<K, Handle>,
}

impl<K: Hash + Eq, V> LruSegment<K, V> {
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        LruSegment {
            cap,
            arena: Arena::with_capacity(cap.get()),
            list: List::new(),
            map: index::with_capacity(cap.get()),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        self.list.move_to_front(&mut self.arena, node);
        self.arena.get(node).map(|entry| &entry.value)
    }

    pub(crate) fn put(&mut self, key: K, value: V) -> AddOutcome
    where
        K: Clone,
    {
        if let Some(&node) = self.map.get(&key) {
            if let Some(entry) = self.arena.get_mut(node) {
                entry.replace_value(value);
            }
            self.list.move_to_front(&mut self.arena, node);
            return AddOutcome::Rewritten;
        }

        let outcome = if self.map.len() >= self.cap.get() && self.evict().is_some() {
            AddOutcome::Evicted
        } else {
            AddOutcome::Inserted
        };

        let node = self.arena.insert(CacheEntry::new(key.clone(), value));
        self.list.push_front(&mut self.arena, node);
        self.map.insert(key, node);
        outcome
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        self.list.unlink(&mut self.arena, node);
        self.arena.remove(node).map(|entry| entry.value)
    }

    /// Removes the tail entry, the one the next insertion at capacity would evict.
    pub(crate) fn pop(&mut self) -> Option<(K, V)> {
        let node = self.list.pop_back(&mut self.arena)?;
        let entry = self.arena.remove(node)?;
        self.map.remove(&entry.key);
        Some(entry.into_pair())
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let evicted = self.pop();
        if evicted.is_some() {
            trace!(policy = "lru", len = self.map.len(), "evicted least recently used entry");
        }
        evicted
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.arena.clear();
        self.list = List::new();
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate_invariants(&self) {
        self.list.debug_validate(&self.arena);
        assert!(self.map.len() <= self.cap.get(), "cache over capacity");
        assert_eq!(self.map.len(), self.list.len(), "index and list disagree");
        assert_eq!(self.map.len(), self.arena.len(), "index and arena disagree");
        for (node, entry) in self.list.iter(&self.arena) {
            assert_eq!(self.map.get(&entry.key), Some(&node), "index points elsewhere");
        }
    }

    /// Keys from most to least recently used.
    #[cfg(test)]
    pub(crate) fn keys_by_recency(&self) -> Vec<&K> {
        self.list.iter(&self.arena).map(|(_, entry)| &entry.key).collect()
    }
}

impl<K, V> fmt::Debug for LruSegment<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.cap)
            .field("len", &self.map.len())
            .finish()
    }
}

/// A thread-safe Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and removing entries. When the cache is full, adding
/// a new key evicts the least recently used entry.
///
/// # Examples
///
/// ```
/// use cacherno::{AddOutcome, LruCache};
///
/// let cache = LruCache::new(2).unwrap();
///
/// cache.add("apple", 1);
/// cache.add("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.add("cherry", 3), AddOutcome::Evicted);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(1));
/// assert_eq!(cache.get(&"cherry"), Some(3));
/// ```
pub struct LruCache<K, V> {
    segment: Mutex<LruSegment<K, V>>,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Self::init(LruCacheConfig { capacity })
    }

    /// Creates a cache from a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use cacherno::config::LruCacheConfig;
    /// use cacherno::LruCache;
    ///
    /// let cache: LruCache<String, u64> = LruCache::init(LruCacheConfig { capacity: 64 }).unwrap();
    /// assert_eq!(cache.cap().get(), 64);
    /// ```
    pub fn init(config: LruCacheConfig) -> Result<Self, CacheError> {
        let cap = config.validate()?;
        debug!(policy = "lru", capacity = cap.get(), "created cache");
        Ok(Self {
            segment: Mutex::new(LruSegment::new(cap)),
        })
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.segment.lock().cap()
    }

    /// Returns the current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Checks whether `key` is present without touching its recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains_key(key)
    }

    /// Looks up `key`, marks it most recently used and runs `f` on the value
    /// while the lock is held. Avoids cloning the value.
    ///
    /// ```
    /// use cacherno::LruCache;
    ///
    /// let cache = LruCache::new(4).unwrap();
    /// cache.add("page", vec![0u8; 4096]);
    /// assert_eq!(cache.get_with(&"page", |bytes| bytes.len()), Some(4096));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.lock().get(key).map(f)
    }

    /// Stores `value` under `key` and reports what happened.
    ///
    /// See [`AddOutcome`] for the three possible results.
    pub fn add(&self, key: K, value: V) -> AddOutcome
    where
        K: Clone,
    {
        self.segment.lock().put(key, value)
    }

    /// Removes `key`, returning `true` if it was present.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key).is_some()
    }

    /// Removes `key` and hands back its value.
    pub fn take<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Removes and returns the least recently used entry.
    ///
    /// ```
    /// use cacherno::LruCache;
    ///
    /// let cache = LruCache::new(3).unwrap();
    /// cache.add("a", 1);
    /// cache.add("b", 2);
    /// cache.get(&"a");
    /// assert_eq!(cache.pop(), Some(("b", 2)));
    /// assert_eq!(cache.pop(), Some(("a", 1)));
    /// assert_eq!(cache.pop(), None);
    /// ```
    pub fn pop(&self) -> Option<(K, V)> {
        self.segment.lock().pop()
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&self) {
        self.segment.lock().clear()
    }

    /// Panics if the list, arena and index disagree in any way.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.segment.lock().debug_validate_invariants()
    }
}

impl<K: Hash + Eq, V: Clone> LruCache<K, V> {
    /// Returns a clone of the value for `key` and marks it most recently used.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Cache<K, V> for LruCache<K, V> {
    fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        LruCache::get(self, key)
    }

    fn add(&self, key: K, value: V) -> AddOutcome {
        LruCache::add(self, key, value)
    }

    fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        LruCache::remove(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn cap(&self) -> NonZeroUsize {
        LruCache::cap(self)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("segment", &*self.segment.lock())
            .finish()
    }
}
