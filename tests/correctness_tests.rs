//! Correctness Tests for Cache Algorithms
//!
//! This module validates the fundamental correctness of each cache algorithm
//! using simple, predictable access patterns. Each test explicitly validates
//! which specific key gets evicted when an add causes an eviction.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Each test validates the core eviction policy of the algorithm
//! - Explicit checks for which key was evicted after each add

use cacherno::config::{LfuCacheConfig, LruCacheConfig};
use cacherno::{AddOutcome, Cache, CacheError, LfuCache, LruCache};
use std::hash::Hash;

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: Hash + Eq + Clone, V: Clone>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }).unwrap()
}

/// Helper to create an LfuCache with the given capacity
fn make_lfu<K: Hash + Eq + Clone, V: Clone>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap }).unwrap()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_zero_capacity_is_rejected() {
    let lru = LruCache::<&str, i32>::init(LruCacheConfig { capacity: 0 });
    let lfu = LfuCache::<&str, i32>::init(LfuCacheConfig { capacity: 0 });

    assert_eq!(lru.unwrap_err(), CacheError::InvalidCapacity);
    let err = lfu.unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity);
    assert_eq!(err.to_string(), "must provide a positive size");
}

#[test]
fn test_capacity_is_reported() {
    let lru: LruCache<u8, u8> = make_lru(7);
    let lfu: LfuCache<u8, u8> = make_lfu(9);
    assert_eq!(lru.cap().get(), 7);
    assert_eq!(lfu.cap().get(), 9);
    assert!(lru.is_empty());
    assert!(lfu.is_empty());
}

// ============================================================================
// LRU CORRECTNESS
// ============================================================================
// LRU evicts the Least Recently Used item.
// Correctness criteria:
// 1. Most recently accessed items are kept
// 2. Oldest accessed items are evicted first
// 3. Access (get) updates recency, preventing eviction

#[test]
fn test_lru_get_protects_from_eviction() {
    let cache = make_lru(2);

    cache.add("a", 1);
    cache.add("b", 2);
    assert_eq!(cache.get(&"a"), Some(1));
    // LRU order: b (LRU) -> a (MRU)

    assert_eq!(cache.add("c", 3), AddOutcome::Evicted);

    assert_eq!(cache.get(&"b"), None, "b should be evicted (was LRU)");
    assert_eq!(cache.get(&"a"), Some(1), "a should survive its recent access");
    assert_eq!(cache.get(&"c"), Some(3));
}

#[test]
fn test_lru_eviction_order_is_predictable() {
    let cache = make_lru(5);

    // Fill cache with keys 0..4
    for i in 0..5 {
        assert_eq!(cache.add(i, i * 10), AddOutcome::Inserted);
    }
    // LRU order: 0 (LRU) -> 1 -> 2 -> 3 -> 4 (MRU)

    for (new_key, evicted_key) in [(5, 0), (6, 1), (7, 2)] {
        assert_eq!(cache.add(new_key, new_key * 10), AddOutcome::Evicted);
        assert!(
            !cache.contains_key(&evicted_key),
            "Key {} should be evicted when {} is added",
            evicted_key,
            new_key
        );
    }

    // Remaining keys should be 3, 4, 5, 6, 7
    for key in 3..8 {
        assert_eq!(cache.get(&key), Some(key * 10), "Key {} should remain", key);
    }
}

#[test]
fn test_lru_rewrite_refreshes_recency() {
    let cache = make_lru(3);

    cache.add(1, 10);
    cache.add(2, 20);
    cache.add(3, 30);
    // LRU order: 1 (LRU) -> 2 -> 3 (MRU)

    let outcome = cache.add(1, 11);
    assert!(outcome.rewritten());
    assert!(!outcome.evicted());
    // LRU order: 2 (LRU) -> 3 -> 1 (MRU)

    cache.add(4, 40);
    assert_eq!(cache.get(&1), Some(11), "rewritten key keeps its new value");
    assert_eq!(cache.get(&2), None, "Key 2 should be evicted");
}

#[test]
fn test_lru_contains_key_does_not_promote() {
    let cache = make_lru(2);
    cache.add("a", 1);
    cache.add("b", 2);

    assert!(cache.contains_key(&"a"));
    cache.add("c", 3);

    assert!(!cache.contains_key(&"a"), "contains_key must not refresh recency");
    assert!(cache.contains_key(&"b"));
}

#[test]
fn test_lru_go_style_add_table() {
    let cache = make_lru(2);
    let steps = [
        ("key1", 1, false, false),
        ("key2", 2, false, false),
        ("key3", 3, true, false),
        ("key2", 22, false, true),
    ];
    for (key, value, evicted, rewritten) in steps {
        let outcome = cache.add(key, value);
        assert_eq!(outcome.evicted(), evicted, "evicted flag for {}", key);
        assert_eq!(outcome.rewritten(), rewritten, "rewritten flag for {}", key);
    }
    assert_eq!(cache.get(&"key2"), Some(22));
    assert_eq!(cache.get(&"key1"), None);
}

// ============================================================================
// LFU CORRECTNESS
// ============================================================================
// LFU evicts the Least Frequently Used item.
// Correctness criteria:
// 1. Items with lowest access frequency are evicted first
// 2. Among same frequency, the item promoted to it earliest goes first
// 3. Each get() or rewriting add() increases frequency by one

#[test]
fn test_lfu_evicts_least_frequently_used() {
    let cache = make_lfu(3);

    cache.add("k1", 1); // freq=1
    cache.add("k2", 2); // freq=1
    cache.add("k3", 3); // freq=1

    cache.get(&"k1"); // freq=2
    cache.get(&"k1"); // freq=3
    cache.get(&"k2"); // freq=2

    // Frequencies: k1=3, k2=2, k3=1 (lowest)
    assert_eq!(cache.add("k4", 4), AddOutcome::Evicted);

    assert_eq!(cache.get(&"k3"), None, "k3 should be evicted (lowest freq=1)");
    assert_eq!(cache.get(&"k1"), Some(1), "k1 should remain (freq=3)");
    assert_eq!(cache.get(&"k2"), Some(2), "k2 should remain (freq=2)");
    assert_eq!(cache.get(&"k4"), Some(4));
}

#[test]
fn test_lfu_tie_evicts_earliest_promoted() {
    let cache = make_lfu(2);

    cache.add("k1", 1);
    cache.add("k2", 2);
    cache.get(&"k1"); // k1 reaches freq=2 first
    cache.get(&"k2"); // k2 reaches freq=2 second

    assert!(cache.add("k3", 3).evicted());

    assert_eq!(cache.get(&"k1"), None, "k1 should be evicted (tie, promoted earlier)");
    assert_eq!(cache.get(&"k2"), Some(2));
    assert_eq!(cache.get(&"k3"), Some(3));
}

#[test]
fn test_lfu_same_frequency_uses_insertion_order() {
    let cache = make_lfu(3);

    cache.add(1, 10);
    cache.add(2, 20);
    cache.add(3, 30);

    // All at freq=1: oldest insert goes first
    cache.add(4, 40);
    assert!(!cache.contains_key(&1), "Key 1 should be evicted first");
    cache.add(5, 50);
    assert!(!cache.contains_key(&2), "Key 2 should be evicted second");
    assert!(cache.contains_key(&3));
}

#[test]
fn test_lfu_frequency_accumulates() {
    let cache = make_lfu(3);

    cache.add("hot", 1);
    cache.add("warm", 2);
    cache.add("cold", 3);

    for _ in 0..10 {
        cache.get(&"hot");
    }
    for _ in 0..5 {
        cache.get(&"warm");
    }
    assert_eq!(cache.frequency(&"hot"), Some(11));
    assert_eq!(cache.frequency(&"warm"), Some(6));
    assert_eq!(cache.frequency(&"cold"), Some(1));

    // Each new arrival only displaces the previous one-hit key
    for (i, key) in ["new1", "new2", "new3"].into_iter().enumerate() {
        assert!(cache.add(key, 10 + i as i32).evicted());
    }
    assert!(cache.contains_key(&"hot"));
    assert!(cache.contains_key(&"warm"));
    assert!(cache.contains_key(&"new3"));
    assert!(!cache.contains_key(&"cold"));
}

#[test]
fn test_lfu_rewrite_counts_as_access() {
    let cache = make_lfu(2);
    cache.add("a", 1);
    cache.add("b", 2);

    let outcome = cache.add("a", 100);
    assert_eq!(outcome, AddOutcome::Rewritten);
    assert_eq!(cache.frequency(&"a"), Some(2));

    cache.add("c", 3);
    assert_eq!(cache.get(&"a"), Some(100));
    assert!(!cache.contains_key(&"b"));
}

#[test]
fn test_lfu_capacity_one() {
    let cache = make_lfu(1);
    cache.add("a", 1);
    cache.get(&"a");
    cache.get(&"a");

    // Even a hot entry must make room when it is the only one
    assert_eq!(cache.add("b", 2), AddOutcome::Evicted);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"b"), Some(2));
}

// ============================================================================
// SHARED CONTRACT
// ============================================================================

fn check_remove_idempotence<C: Cache<&'static str, i32>>(cache: &C) {
    cache.add("a", 1);
    cache.add("b", 2);

    assert!(!cache.remove(&"missing"));
    assert_eq!(cache.len(), 2);

    assert!(cache.remove(&"a"));
    assert_eq!(cache.get(&"a"), None);
    assert!(!cache.remove(&"a"));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"b"), Some(2));
}

fn check_capacity_enforcement<C: Cache<u32, u32>>(cache: &C) {
    let cap = cache.cap().get() as u32;
    for i in 0..cap * 3 {
        let outcome = cache.add(i, i);
        assert!(cache.len() <= cap as usize);
        assert_eq!(outcome.evicted(), i >= cap, "add #{} eviction flag", i);
    }
    assert_eq!(cache.len(), cap as usize);
}

fn check_rewrite_never_evicts<C: Cache<u32, u32>>(cache: &C) {
    let cap = cache.cap().get() as u32;
    for i in 0..cap {
        cache.add(i, i);
    }
    for i in 0..cap {
        let outcome = cache.add(i, i + 100);
        assert!(outcome.rewritten());
        assert!(!outcome.evicted());
        assert_eq!(cache.get(&i), Some(i + 100));
    }
    assert_eq!(cache.len(), cap as usize);
}

fn check_miss_leaves_state_alone<C: Cache<u32, u32>>(cache: &C) {
    cache.add(1, 1);
    cache.add(2, 2);
    assert_eq!(cache.get(&99), None);
    assert_eq!(cache.len(), 2);
    // A miss does not reorder anything: key 1 is still the victim
    cache.add(3, 3);
    assert_eq!(cache.get(&1), None);
}

#[test]
fn test_all_caches_remove_idempotence() {
    check_remove_idempotence(&make_lru::<&str, i32>(3));
    check_remove_idempotence(&make_lfu::<&str, i32>(3));
}

#[test]
fn test_all_caches_capacity_enforcement() {
    check_capacity_enforcement(&make_lru::<u32, u32>(4));
    check_capacity_enforcement(&make_lfu::<u32, u32>(4));
}

#[test]
fn test_all_caches_rewrite_never_evicts() {
    check_rewrite_never_evicts(&make_lru::<u32, u32>(3));
    check_rewrite_never_evicts(&make_lfu::<u32, u32>(3));
}

#[test]
fn test_all_caches_miss_leaves_state_alone() {
    check_miss_leaves_state_alone(&make_lru::<u32, u32>(2));
    check_miss_leaves_state_alone(&make_lfu::<u32, u32>(2));
}

#[test]
fn test_all_caches_clear() {
    let lru = make_lru(3);
    let lfu = make_lfu(3);
    for i in 0..3 {
        lru.add(i, i);
        lfu.add(i, i);
    }
    lru.clear();
    lfu.clear();
    assert!(lru.is_empty());
    assert!(lfu.is_empty());
    assert_eq!(lru.cap().get(), 3);
    assert_eq!(lfu.cap().get(), 3);

    assert_eq!(lru.add(7, 7), AddOutcome::Inserted);
    assert_eq!(lfu.add(7, 7), AddOutcome::Inserted);
}

#[test]
fn test_all_caches_pop_follows_eviction_order() {
    let lru = make_lru(3);
    let lfu = make_lfu(3);
    for i in 0..3 {
        lru.add(i, i);
        lfu.add(i, i);
    }
    lru.get(&0);
    lfu.get(&0);

    assert_eq!(lru.pop(), Some((1, 1)));
    assert_eq!(lfu.pop(), Some((1, 1)));
    assert_eq!(lru.pop(), Some((2, 2)));
    assert_eq!(lfu.pop(), Some((2, 2)));
    assert_eq!(lru.pop(), Some((0, 0)));
    assert_eq!(lfu.pop(), Some((0, 0)));
    assert_eq!(lru.pop(), None);
    assert_eq!(lfu.pop(), None);
}

#[test]
fn test_all_caches_borrowed_key_lookup() {
    let lru: LruCache<String, usize> = make_lru(2);
    let lfu: LfuCache<String, usize> = make_lfu(2);
    lru.add("alpha".to_string(), 1);
    lfu.add("alpha".to_string(), 1);

    assert_eq!(lru.get("alpha"), Some(1));
    assert_eq!(lfu.get("alpha"), Some(1));
    assert_eq!(lru.get_with("alpha", |v| v * 2), Some(2));
    assert_eq!(lfu.get_with("alpha", |v| v * 2), Some(2));
    assert_eq!(lru.take("alpha"), Some(1));
    assert_eq!(lfu.take("alpha"), Some(1));
    assert!(lru.is_empty());
    assert!(lfu.is_empty());
}
