//! Least Frequently Used Cache Implementation.
//!
//! The LFU cache evicts the least frequently accessed item when the cache
//! reaches capacity. Among items sharing the lowest frequency, the one that
//! has sat at that frequency longest goes first.
//!
//! # Algorithm
//!
//! ```text
//!   buckets: frequency -> List            min_frequency = 1
//!
//!   freq=1: head ─► [d] ◄──► [c] ◄── tail     (c is the next victim)
//!   freq=3: head ─► [a] ◄── tail
//!   freq=4: head ─► [b] ◄── tail
//! ```
//!
//! - A new key enters the freq=1 bucket at its head and resets
//!   `min_frequency` to 1.
//! - A hit (or a rewrite through `add`) unlinks the entry from bucket `f`,
//!   bumps it to `f + 1` and links it at the head of that bucket. A bucket is
//!   dropped the moment it empties. If the dropped bucket was the minimum,
//!   the minimum becomes `f + 1`: frequencies only ever grow by one, so the
//!   entry just promoted now holds the lowest live frequency.
//! - Eviction pops the tail of the `min_frequency` bucket.
//!
//! Every step is O(1). The one exception is `remove`/`pop` emptying the
//! minimum bucket, which rescans the bucket keys (at most one per distinct
//! live frequency) to find the new minimum.
//!
//! # Thread Safety
//!
//! [`LfuCache`] serializes every operation, `get` included, behind one
//! `parking_lot::Mutex`. Promotion moves entries between buckets, so a lookup
//! is a write.

use crate::config::LfuCacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::index::{self, IndexMap};
use crate::list::{Arena, Handle, List};
use crate::meta::LfuMeta;
use crate::traits::{AddOutcome, Cache};
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::num::NonZeroUsize;
use parking_lot::Mutex;
use tracing::{debug, trace};

type LfuEntry<K, V> = CacheEntry<K, V, LfuMeta>;

/// Internal LFU segment containing the actual cache algorithm.
///
/// All entries share one arena; each frequency bucket is a [`List`]
/// threaded through it. A bucket exists only while it holds an entry.
pub(crate) struct LfuSegment<K, V> {
    cap: NonZeroUsize,

    /// Smallest frequency with a live bucket. Meaningless while empty.
    min_frequency: u64,

    arena: Arena<LfuEntry<K, V>>,

    /// Map from keys to their arena handle
    map: IndexMap<K, Handle>,

    /// Map from frequency to the entries at that frequency,
    /// most recently promoted at the head
    buckets: IndexMap<u64, List>,
}

impl<K: Hash + Eq, V> LfuSegment<K, V> {
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        LfuSegment {
            cap,
            min_frequency: 1,
            arena: Arena::with_capacity(cap.get()),
            map: index::with_capacity(cap.get()),
            buckets: index::with_capacity(0),
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

    pub(crate) fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        self.arena.get(node).map(|entry| entry.metadata.frequency)
    }

    /// Links `node` at the head of the bucket for `frequency`, creating it if needed.
    fn attach(&mut self, node: Handle, frequency: u64) {
        self.buckets
            .entry(frequency)
            .or_default()
            .push_front(&mut self.arena, node);
    }

    /// Unlinks `node` from the bucket for `frequency`, dropping the bucket
    /// if it empties. Returns `true` when the bucket was dropped.
    fn detach(&mut self, node: Handle, frequency: u64) -> bool {
        let Some(bucket) = self.buckets.get_mut(&frequency) else {
            return false;
        };
        bucket.unlink(&mut self.arena, node);
        if bucket.is_empty() {
            self.buckets.remove(&frequency);
            true
        } else {
            false
        }
    }

    /// Moves `node` from its bucket to the next one up.
    fn increment_frequency(&mut self, node: Handle) {
        let Some(old_frequency) = self.arena.get(node).map(|e| e.metadata.frequency) else {
            return;
        };
        let emptied = self.detach(node, old_frequency);
        let new_frequency = match self.arena.get_mut(node) {
            Some(entry) => entry.metadata.increment(),
            None => return,
        };
        self.attach(node, new_frequency);

        if emptied && old_frequency == self.min_frequency {
            self.min_frequency = new_frequency;
        }
    }

    fn refresh_min_frequency(&mut self) {
        self.min_frequency = self.buckets.keys().copied().min().unwrap_or(1);
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        self.increment_frequency(node);
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
            self.increment_frequency(node);
            return AddOutcome::Rewritten;
        }

        let outcome = if self.map.len() >= self.cap.get() && self.evict().is_some() {
            AddOutcome::Evicted
        } else {
            AddOutcome::Inserted
        };

        let node = self
            .arena
            .insert(CacheEntry::with_metadata(key.clone(), value, LfuMeta::new(1)));
        self.attach(node, 1);
        self.map.insert(key, node);
        self.min_frequency = 1;
        outcome
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        let frequency = self.arena.get(node)?.metadata.frequency;
        let emptied = self.detach(node, frequency);
        let entry = self.arena.remove(node)?;
        if emptied && frequency == self.min_frequency {
            self.refresh_min_frequency();
        }
        Some(entry.value)
    }

    /// Unlinks and frees the tail of the minimum-frequency bucket. Leaves
    /// `min_frequency` stale if that bucket empties; callers fix it up.
    fn take_least_frequent(&mut self) -> Option<LfuEntry<K, V>> {
        let min_frequency = self.min_frequency;
        let bucket = self.buckets.get_mut(&min_frequency)?;
        let node = bucket.pop_back(&mut self.arena)?;
        if bucket.is_empty() {
            self.buckets.remove(&min_frequency);
        }
        let entry = self.arena.remove(node)?;
        self.map.remove(&entry.key);
        Some(entry)
    }

    /// Removes the eviction candidate: lowest frequency, oldest within it.
    pub(crate) fn pop(&mut self) -> Option<(K, V)> {
        let entry = self.take_least_frequent()?;
        if !self.buckets.contains_key(&self.min_frequency) {
            self.refresh_min_frequency();
        }
        Some(entry.into_pair())
    }

    // The caller inserts a frequency-1 entry right after, which resets the minimum.
    fn evict(&mut self) -> Option<u64> {
        let frequency = self.take_least_frequent()?.metadata.frequency;
        trace!(policy = "lfu", frequency, len = self.map.len(), "evicted least frequently used entry");
        Some(frequency)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.buckets.clear();
        self.arena.clear();
        self.min_frequency = 1;
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn debug_validate_invariants(&self) {
        assert!(self.map.len() <= self.cap.get(), "cache over capacity");
        assert_eq!(self.map.len(), self.arena.len(), "index and arena disagree");

        let mut total = 0usize;
        for (&frequency, bucket) in self.buckets.iter() {
            assert!(!bucket.is_empty(), "empty bucket kept for frequency {frequency}");
            bucket.debug_validate(&self.arena);
            for (node, entry) in bucket.iter(&self.arena) {
                assert_eq!(entry.metadata.frequency, frequency, "entry in wrong bucket");
                assert_eq!(self.map.get(&entry.key), Some(&node), "index points elsewhere");
            }
            total += bucket.len();
        }
        assert_eq!(total, self.map.len(), "buckets and index disagree");

        if !self.map.is_empty() {
            assert_eq!(
                self.buckets.keys().copied().min(),
                Some(self.min_frequency),
                "min_frequency is not the lowest live bucket"
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn min_frequency(&self) -> u64 {
        self.min_frequency
    }

    #[cfg(test)]
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Keys in the bucket for `frequency`, most recently promoted first.
    #[cfg(test)]
    pub(crate) fn bucket_keys(&self, frequency: u64) -> Vec<&K> {
        self.buckets
            .get(&frequency)
            .map(|bucket| bucket.iter(&self.arena).map(|(_, e)| &e.key).collect())
            .unwrap_or_default()
    }
}

impl<K, V> fmt::Debug for LfuSegment<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuSegment")
            .field("capacity", &self.cap)
            .field("len", &self.map.len())
            .field("min_frequency", &self.min_frequency)
            .finish()
    }
}

/// A thread-safe Least Frequently Used (LFU) cache.
///
/// The cache tracks how often each item is accessed and evicts the least
/// frequently used item when full. In case of a tie in frequency, the least
/// recently promoted item among those with the same frequency is evicted.
///
/// # Examples
///
/// ```
/// use cacherno::LfuCache;
///
/// let cache = LfuCache::new(3).unwrap();
///
/// cache.add("a", 1);
/// cache.add("b", 2);
/// cache.add("c", 3);
///
/// // Access "a" multiple times to increase its frequency
/// assert_eq!(cache.get(&"a"), Some(1));
/// assert_eq!(cache.get(&"a"), Some(1));
/// assert_eq!(cache.get(&"b"), Some(2));
///
/// // "c" was never read back, so it goes first
/// assert!(cache.add("d", 4).evicted());
/// assert_eq!(cache.get(&"c"), None);
/// assert_eq!(cache.frequency(&"a"), Some(3));
/// ```
pub struct LfuCache<K, V> {
    segment: Mutex<LfuSegment<K, V>>,
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Self::init(LfuCacheConfig { capacity })
    }

    /// Creates a cache from a configuration.
    pub fn init(config: LfuCacheConfig) -> Result<Self, CacheError> {
        let cap = config.validate()?;
        debug!(policy = "lfu", capacity = cap.get(), "created cache");
        Ok(Self {
            segment: Mutex::new(LfuSegment::new(cap)),
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

    /// Checks whether `key` is present without counting an access.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains_key(key)
    }

    /// Returns how many times `key` has been inserted or accessed, without
    /// counting this call as an access.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().frequency(key)
    }

    /// Looks up `key`, counts the access and runs `f` on the value while the
    /// lock is held. Avoids cloning the value.
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
    /// Rewriting an existing key counts as an access. New keys start at
    /// frequency 1.
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

    /// Removes and returns the eviction candidate (least frequently used item).
    ///
    /// ```
    /// use cacherno::LfuCache;
    ///
    /// let cache = LfuCache::new(2).unwrap();
    /// cache.add("a", 1);
    /// cache.add("b", 2);
    /// cache.get(&"b");
    ///
    /// assert_eq!(cache.pop(), Some(("a", 1)));
    /// assert_eq!(cache.pop(), Some(("b", 2)));
    /// assert_eq!(cache.pop(), None);
    /// ```
    pub fn pop(&self) -> Option<(K, V)> {
        self.segment.lock().pop()
    }

    /// Drops every entry and all frequency history. Capacity is unchanged.
    pub fn clear(&self) {
        self.segment.lock().clear()
    }

    /// Panics if buckets, arena, index or `min_frequency` disagree in any way.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.segment.lock().debug_validate_invariants()
    }
}

impl<K: Hash + Eq, V: Clone> LfuCache<K, V> {
    /// Returns a clone of the value for `key` and counts the access.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Cache<K, V> for LfuCache<K, V> {
    fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        LfuCache::get(self, key)
    }

    fn add(&self, key: K, value: V) -> AddOutcome {
        LfuCache::add(self, key, value)
    }

    fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        LfuCache::remove(self, key)
    }

    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    fn cap(&self) -> NonZeroUsize {
        LfuCache::cap(self)
    }
}

impl<K, V> fmt::Debug for LfuCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("segment", &*self.segment.lock())
            .finish()
    }
}
