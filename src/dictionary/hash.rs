//! Chained hash dictionary with dynamic rehashing.
//!
//! ## Structure
//!
//! The bucket array is an [`ArraySequence`] of optional chains; each
//! chain is a [`ListSequence`] of key-value entries. A stored key lives
//! in exactly one bucket, exactly once, at index `hash(key) % buckets`.
//!
//! ## Resize Policy
//!
//! Before every insertion the table rehashes into double the bucket
//! count if either condition holds:
//!
//! - load factor reached 3/4 (`count * 4 >= buckets * 3`), or
//! - a previous insertion made some chain reach length 10 (flagged at
//!   that insertion, consumed by the next one).
//!
//! The chain-length trigger bounds worst-case probe cost under skewed
//! or adversarial key distributions that the load factor alone would
//! not catch. Rehashing preserves every entry and is the only
//! operation that changes which bucket a key maps to.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::dictionary::{Dictionary, KeyValue};
use crate::error::{Error, Result};
use crate::sequence::{ArraySequence, ListSequence, Sequence};

const DEFAULT_BUCKETS: usize = 11;
const LOAD_NUMERATOR: usize = 3;
const LOAD_DENOMINATOR: usize = 4;
const GROWTH_FACTOR: usize = 2;
const MAX_CHAIN_LEN: usize = 10;

type Chain<K, V> = ListSequence<KeyValue<K, V>>;
type Buckets<K, V> = ArraySequence<Option<Chain<K, V>>>;

/// Hash a key with the standard library's general-purpose hasher.
pub fn default_hash<K: Hash>(key: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Chained hash dictionary.
///
/// The hash function is supplied as a plain function value at
/// construction, so tests and callers with special key distributions
/// can swap it without changing the table's type.
///
/// # Example
///
/// ```
/// use alphadex::dictionary::{Dictionary, HashTable};
///
/// let mut table = HashTable::new();
/// table.insert("alpha", 1);
/// table.insert("beta", 2);
/// table.insert("alpha", 10); // upsert
///
/// assert_eq!(table.count(), 2);
/// assert_eq!(table.get(&"alpha"), Ok(&10));
/// ```
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    buckets: Buckets<K, V>,
    len: usize,
    rehash_pending: bool,
    hasher: fn(&K) -> u64,
}

impl<K: Clone + Eq + Hash + 'static, V: Clone + 'static> HashTable<K, V> {
    /// Table with the default bucket count and the standard hasher.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Table with `buckets` initial buckets (clamped to at least 1) and
    /// the standard hasher.
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_hasher(buckets, default_hash::<K>)
    }
}

impl<K: Clone + Eq + Hash + 'static, V: Clone + 'static> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + 'static, V: Clone + 'static> HashTable<K, V> {
    /// Table with a custom hash function.
    pub fn with_hasher(buckets: usize, hasher: fn(&K) -> u64) -> Self {
        Self {
            buckets: empty_buckets(buckets.max(1)),
            len: 0,
            rehash_pending: false,
            hasher,
        }
    }

    #[inline]
    fn bucket_index(&self, key: &K, buckets: usize) -> usize {
        ((self.hasher)(key) as usize) % buckets
    }

    fn find_entry(&self, key: &K) -> Option<&KeyValue<K, V>> {
        let idx = self.bucket_index(key, self.buckets.len());
        let chain = self.buckets.as_slice()[idx].as_ref()?;
        chain.iter().find(|entry| entry.key == *key)
    }

    /// Rehash into double the bucket count when the resize policy asks
    /// for it. Called before every insertion.
    fn maybe_rehash(&mut self) {
        let buckets = self.buckets.len();
        let overloaded = self.len * LOAD_DENOMINATOR >= buckets * LOAD_NUMERATOR;
        if !self.rehash_pending && !overloaded {
            return;
        }

        let new_count = GROWTH_FACTOR * buckets;
        let hasher = self.hasher;
        let mut new_buckets = empty_buckets(new_count);
        for bucket in self.buckets.as_slice() {
            let Some(chain) = bucket.as_ref() else {
                continue;
            };
            for entry in chain.iter() {
                let idx = (hasher(&entry.key) as usize) % new_count;
                new_buckets.as_mut_slice()[idx]
                    .get_or_insert_with(ListSequence::new)
                    .append(entry.clone());
            }
        }
        self.buckets = new_buckets;
        self.rehash_pending = false;
    }
}

fn empty_buckets<K: Clone + 'static, V: Clone + 'static>(count: usize) -> Buckets<K, V> {
    let mut buckets = ArraySequence::with_capacity(count);
    for _ in 0..count {
        buckets.append(None);
    }
    buckets
}

impl<K: Clone + Eq + 'static, V: Clone + 'static> Dictionary<K, V> for HashTable<K, V> {
    #[inline]
    fn count(&self) -> usize {
        self.len
    }

    /// Current bucket count.
    #[inline]
    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn get(&self, key: &K) -> Result<&V> {
        self.find_entry(key)
            .map(|entry| &entry.value)
            .ok_or(Error::KeyNotFound)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.find_entry(key).is_some()
    }

    fn insert(&mut self, key: K, value: V) {
        self.maybe_rehash();
        let idx = self.bucket_index(&key, self.buckets.len());
        let bucket = &mut self.buckets.as_mut_slice()[idx];
        let chain = bucket.get_or_insert_with(ListSequence::new);

        if let Some(pos) = chain.iter().position(|entry| entry.key == key) {
            if let Ok(entry) = chain.get_mut(pos) {
                entry.value = value;
            }
            return;
        }

        if chain.len() + 1 >= MAX_CHAIN_LEN {
            // consumed by the next insert, before it lands
            self.rehash_pending = true;
        }
        chain.append(KeyValue::new(key, value));
        self.len += 1;
    }

    fn remove(&mut self, key: &K) -> Result<V> {
        let idx = self.bucket_index(key, self.buckets.len());
        let bucket = &mut self.buckets.as_mut_slice()[idx];
        let chain = bucket.as_mut().ok_or(Error::KeyNotFound)?;
        let pos = chain
            .iter()
            .position(|entry| entry.key == *key)
            .ok_or(Error::KeyNotFound)?;
        let entry = chain.erase_at(pos)?;
        if chain.is_empty() {
            // release the bucket so lookups see it as empty
            *bucket = None;
        }
        self.len -= 1;
        Ok(entry.value)
    }

    /// Keys in bucket-then-chain order. The order is unspecified across
    /// resizes.
    fn keys(&self) -> Box<dyn Sequence<K>> {
        let mut keys = ListSequence::new();
        for entry in self.entries() {
            keys.append(entry.key.clone());
        }
        Box::new(keys)
    }

    fn values(&self) -> Box<dyn Sequence<V>> {
        let mut values = ListSequence::new();
        for entry in self.entries() {
            values.append(entry.value.clone());
        }
        Box::new(values)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = &KeyValue<K, V>> + '_> {
        Box::new(
            self.buckets
                .as_slice()
                .iter()
                .filter_map(|bucket| bucket.as_ref())
                .flat_map(|chain| chain.iter()),
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
