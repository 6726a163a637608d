//! Sorted-array dictionary.
//!
//! A [`FlatTable`] keeps its entries in a [`SortedSequence`] ordered by
//! key. Lookup is a binary search, insert shifts the tail of the
//! array, and iteration is always ascending by key — the deliberate
//! trade against [`HashTable`](crate::dictionary::HashTable): slower
//! mutation for deterministic ordered iteration with no hashing.

use crate::dictionary::{Dictionary, KeyValue};
use crate::error::{Error, Result};
use crate::sequence::{ListSequence, Sequence, SortedSequence};

fn key_less<K: Ord, V>(a: &KeyValue<K, V>, b: &KeyValue<K, V>) -> bool {
    a.key < b.key
}

/// Dictionary backed by a key-sorted sequence of pairs.
///
/// Keys are unique; `insert` on an existing key replaces the value
/// without changing count or order.
///
/// # Example
///
/// ```
/// use alphadex::dictionary::{Dictionary, FlatTable};
///
/// let mut table = FlatTable::new();
/// table.insert("gamma", 3);
/// table.insert("alpha", 1);
/// table.insert("beta", 2);
///
/// let keys: Vec<&str> = table.entries().map(|e| e.key).collect();
/// assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
/// ```
#[derive(Debug, Clone)]
pub struct FlatTable<K, V> {
    data: SortedSequence<KeyValue<K, V>>,
}

impl<K: Clone + Ord + 'static, V: Clone + 'static> FlatTable<K, V> {
    pub fn new() -> Self {
        Self {
            data: SortedSequence::with_relation(key_less::<K, V>),
        }
    }

    /// Index of the first entry whose key is not below `key`.
    fn lower_index(&self, key: &K) -> usize {
        self.data.as_slice().partition_point(|entry| entry.key < *key)
    }

    fn find(&self, key: &K) -> Option<usize> {
        let idx = self.lower_index(key);
        let entries = self.data.as_slice();
        if idx < entries.len() && entries[idx].key == *key {
            Some(idx)
        } else {
            None
        }
    }
}

impl<K: Clone + Ord + 'static, V: Clone + 'static> Default for FlatTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Ord + 'static, V: Clone + 'static> Dictionary<K, V> for FlatTable<K, V> {
    #[inline]
    fn count(&self) -> usize {
        self.data.len()
    }

    /// The flat backend has no slack to report; capacity equals count.
    #[inline]
    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn get(&self, key: &K) -> Result<&V> {
        let idx = self.find(key).ok_or(Error::KeyNotFound)?;
        Ok(&self.data.as_slice()[idx].value)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn insert(&mut self, key: K, value: V) {
        if let Some(idx) = self.find(&key) {
            let _ = self.data.erase_at(idx);
        }
        self.data.add(KeyValue::new(key, value));
    }

    fn remove(&mut self, key: &K) -> Result<V> {
        let idx = self.find(key).ok_or(Error::KeyNotFound)?;
        let entry = self.data.erase_at(idx)?;
        Ok(entry.value)
    }

    /// Keys in ascending order.
    fn keys(&self) -> Box<dyn Sequence<K>> {
        let mut keys = ListSequence::new();
        for entry in self.data.iter() {
            keys.append(entry.key.clone());
        }
        Box::new(keys)
    }

    /// Values in ascending key order.
    fn values(&self) -> Box<dyn Sequence<V>> {
        let mut values = ListSequence::new();
        for entry in self.data.iter() {
            values.append(entry.value.clone());
        }
        Box::new(values)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = &KeyValue<K, V>> + '_> {
        Box::new(self.data.iter())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(table: &FlatTable<i32, i32>) -> Vec<(i32, i32)> {
        table.entries().map(|e| (e.key, e.value)).collect()
    }

    #[test]
    fn test_put_and_get() {
        let mut table = FlatTable::new();
        table.insert(2, 20);
        table.insert(1, 10);
        table.insert(3, 30);

        assert_eq!(table.count(), 3);
        assert_eq!(table.get(&1), Ok(&10));
        assert_eq!(table.get(&2), Ok(&20));
        assert_eq!(table.get(&3), Ok(&30));
    }

    #[test]
    fn test_upsert_keeps_count_and_order() {
        let mut table = FlatTable::new();
        table.insert(3, 30);
        table.insert(1, 10);
        table.insert(2, 20);
        table.insert(2, 200);

        assert_eq!(pairs(&table), vec![(1, 10), (2, 200), (3, 30)]);
        assert_eq!(table.count(), 3);
    }

    #[test]
    fn test_remove() {
        let mut table = FlatTable::new();
        table.insert(1, 10);
        table.insert(2, 20);
        assert_eq!(table.remove(&1), Ok(10));
        assert!(!table.contains_key(&1));
        assert_eq!(table.count(), 1);
        assert_eq!(table.remove(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_get_missing_key() {
        let mut table = FlatTable::new();
        table.insert(2, 20);
        assert!(table.contains_key(&2));
        assert!(!table.contains_key(&99));
        assert_eq!(table.get(&99), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_iteration_is_ascending() {
        let mut table = FlatTable::new();
        for key in [9, 4, 7, 1, 8, 2, 6, 3, 5] {
            table.insert(key, key * 10);
        }

        let keys: Vec<i32> = table.keys().iter().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let values: Vec<i32> = table.values().iter().copied().collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);

        // strictly ascending: unique keys, sorted order
        let entry_keys: Vec<i32> = table.entries().map(|e| e.key).collect();
        for pair in entry_keys.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_empty_table() {
        let table: FlatTable<String, i32> = FlatTable::new();
        assert_eq!(table.count(), 0);
        assert!(table.is_empty());
        assert!(table.entries().next().is_none());
        assert_eq!(table.get(&"missing".to_string()), Err(Error::KeyNotFound));
    }
}
