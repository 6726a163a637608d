//! Sorted sequence over the array backend.
//!
//! ## Ordering Relation
//!
//! The order is defined by a caller-supplied strict relation
//! `less(a, b)` meaning "a orders before b". Two elements are equal
//! under the relation when neither orders before the other. The default
//! constructors use the natural `Ord` order.
//!
//! ## Construction Paths
//!
//! Incremental `add` (binary-search insertion) and bulk construction
//! (stable bottom-up merge sort) converge to the same invariant: for
//! every adjacent pair `a, b` in iteration order, `!less(b, a)`. The
//! merge keeps ties in their original order, so callers migrating data
//! between containers see deterministic ordering among equal elements.

use crate::error::{Error, Result};
use crate::sequence::{ArraySequence, Cursor, Sequence};

/// Ordering relation type: `true` when the first argument orders
/// strictly before the second.
pub type Relation<T> = fn(&T, &T) -> bool;

fn natural_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// A sequence kept ordered under a strict "less" relation, with
/// O(log n) binary-search lookup and O(log n) + O(n) shift insertion.
///
/// # Example
///
/// ```
/// use alphadex::sequence::SortedSequence;
///
/// let mut seq = SortedSequence::from_slice(&[5, 1, 3, 2, 4]);
/// seq.add(0);
///
/// assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4, 5]);
/// assert_eq!(seq.index_of(&3), Some(3));
/// assert_eq!(seq.index_of(&9), None);
/// ```
#[derive(Debug, Clone)]
pub struct SortedSequence<T> {
    data: ArraySequence<T>,
    less: Relation<T>,
}

impl<T: Clone + Ord + 'static> SortedSequence<T> {
    /// Empty sequence ordered by the natural `Ord` order.
    pub fn new() -> Self {
        Self::with_relation(natural_less::<T>)
    }

    /// Bulk-construct from a slice using the natural order.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_slice_by(items, natural_less::<T>)
    }
}

impl<T: Clone + Ord + 'static> Default for SortedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> SortedSequence<T> {
    /// Empty sequence ordered by `less`.
    pub fn with_relation(less: Relation<T>) -> Self {
        Self {
            data: ArraySequence::new(),
            less,
        }
    }

    /// Bulk-construct from a slice, merge-sorting under `less`.
    pub fn from_slice_by(items: &[T], less: Relation<T>) -> Self {
        let mut seq = Self {
            data: ArraySequence::from_slice(items),
            less,
        };
        seq.sort();
        seq
    }

    /// Bulk-construct from any sequence, merge-sorting under `less`.
    pub fn from_sequence(source: &dyn Sequence<T>, less: Relation<T>) -> Self {
        let mut seq = Self {
            data: ArraySequence::from_vec(source.iter().cloned().collect()),
            less,
        };
        seq.sort();
        seq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.data.get(index)
    }

    pub fn first(&self) -> Result<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Result<&T> {
        self.data.last()
    }

    /// Smallest index `i` with `!less(self[i], value)`: the first
    /// position where `value` could be inserted without breaking order.
    pub fn lower_bound(&self, value: &T) -> usize {
        let less = self.less;
        let items = self.data.as_slice();
        let mut lo = 0;
        let mut hi = items.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if less(&items[mid], value) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Index of the first element equal to `value` under the relation,
    /// or `None`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let pos = self.lower_bound(value);
        let items = self.data.as_slice();
        if pos < items.len() && !(self.less)(value, &items[pos]) {
            Some(pos)
        } else {
            None
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Insert `value` at its lower bound.
    pub fn add(&mut self, value: T) {
        let pos = self.lower_bound(&value);
        // pos <= len by construction, so this cannot fail
        let _ = self.data.insert_at(value, pos);
    }

    /// Remove the first element equal to `value`, reporting whether
    /// anything was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(idx) => self.data.erase_at(idx).is_ok(),
            None => false,
        }
    }

    pub fn erase_at(&mut self, index: usize) -> Result<T> {
        self.data.erase_at(index)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Copy the inclusive range `[start, end]` into a new sorted
    /// sequence sharing the same relation.
    pub fn subsequence(&self, start: usize, end: usize) -> Result<SortedSequence<T>> {
        let items = self.data.as_slice();
        if end >= items.len() {
            return Err(Error::IndexOutOfRange(end));
        }
        if start > end {
            return Err(Error::IndexOutOfRange(start));
        }
        Ok(Self {
            data: ArraySequence::from_slice(&items[start..=end]),
            less: self.less,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.as_slice().iter()
    }

    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(Box::new(self.iter()))
    }

    /// Stable bottom-up merge sort of the backing array.
    ///
    /// On ties the element from the left run is placed first, which
    /// preserves the original relative order of equal elements.
    fn sort(&mut self) {
        let less = self.less;
        let n = self.data.len();
        if n < 2 {
            return;
        }
        let items = self.data.as_mut_slice();
        let mut buffer: Vec<T> = Vec::with_capacity(n);
        let mut width = 1;
        while width < n {
            let mut lo = 0;
            while lo + width < n {
                let mid = lo + width;
                let hi = (lo + 2 * width).min(n);
                merge(items, lo, mid, hi, less, &mut buffer);
                lo = hi;
            }
            width *= 2;
        }
    }
}

/// Merge the sorted runs `[lo, mid)` and `[mid, hi)` in place through
/// the scratch buffer. Ties take from the left run first.
fn merge<T: Clone>(
    items: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    less: Relation<T>,
    buffer: &mut Vec<T>,
) {
    buffer.clear();
    let mut i = lo;
    let mut j = mid;
    while i < mid && j < hi {
        if less(&items[j], &items[i]) {
            buffer.push(items[j].clone());
            j += 1;
        } else {
            buffer.push(items[i].clone());
            i += 1;
        }
    }
    while i < mid {
        buffer.push(items[i].clone());
        i += 1;
    }
    while j < hi {
        buffer.push(items[j].clone());
        j += 1;
    }
    for (offset, item) in buffer.drain(..).enumerate() {
        items[lo + offset] = item;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
