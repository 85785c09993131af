//! Key index shared by both policies.
//!
//! Maps each key to the arena handle of its entry. The index never decides
//! ordering; it only answers "is this key here, and where" in O(1).

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
pub(crate) use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
pub(crate) use std::collections::HashMap;

/// Hash map type used for every internal index.
pub(crate) type IndexMap<K, V> = HashMap<K, V, DefaultHashBuilder>;

/// Creates an index sized for `capacity` live entries.
pub(crate) fn with_capacity<K, V>(capacity: usize) -> IndexMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
}
