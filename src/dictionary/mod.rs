//! Dictionary containers mapping keys to values.
//!
//! ## Backends
//!
//! - [`HashTable`]: chained hashing over the crate's own sequence
//!   containers, O(1) expected lookup, bucket-order iteration
//! - [`FlatTable`]: sorted array of pairs, O(log n) lookup, ascending
//!   key-order iteration without any hashing
//!
//! Both implement the object-safe [`Dictionary`] trait; callers that
//! only need the mapping contract (such as the page index builder)
//! stay generic over it and let the construction site pick a backend.

pub mod flat;
pub mod hash;

pub use flat::FlatTable;
pub use hash::HashTable;

use crate::error::Result;
use crate::sequence::Sequence;

/// An owned key-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Key-to-value mapping with backend-defined iteration order.
///
/// `get` and `remove` fail with [`crate::Error::KeyNotFound`] for
/// absent keys; `insert` is an upsert and never fails.
pub trait Dictionary<K: Clone + 'static, V: Clone + 'static> {
    /// Number of stored entries.
    fn count(&self) -> usize;

    /// Backend capacity: bucket count for the hash table, entry count
    /// for the flat table.
    fn capacity(&self) -> usize;

    fn get(&self, key: &K) -> Result<&V>;

    fn contains_key(&self, key: &K) -> bool;

    /// Insert or replace the value for `key`.
    fn insert(&mut self, key: K, value: V);

    /// Remove the entry for `key` and return its value.
    fn remove(&mut self, key: &K) -> Result<V>;

    /// All keys, in the backend's iteration order.
    fn keys(&self) -> Box<dyn Sequence<K>>;

    /// All values, in the backend's iteration order.
    fn values(&self) -> Box<dyn Sequence<V>>;

    /// Fused key-value iterator in the backend's iteration order.
    fn entries(&self) -> Box<dyn Iterator<Item = &KeyValue<K, V>> + '_>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
