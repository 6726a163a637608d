//! Contiguous growable sequence backend.
//!
//! ## Growth Policy
//!
//! The backing buffer grows only when an insertion would exceed the
//! current capacity, and it grows by at least doubling. Capacity never
//! shrinks; `clear` keeps the allocation.

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// Minimum capacity allocated by the first growth.
const MIN_CAPACITY: usize = 4;

/// Array-backed sequence: O(1) amortized append, O(n) insert/erase at
/// arbitrary positions, O(1) indexed access.
///
/// # Example
///
/// ```
/// use alphadex::sequence::{ArraySequence, Sequence};
///
/// let mut seq = ArraySequence::from_slice(&[1, 2, 3]);
/// seq.append(4);
/// seq.prepend(0);
///
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq.get(0), Ok(&0));
/// assert_eq!(seq.last(), Ok(&4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArraySequence<T> {
    items: Vec<T>,
}

impl<T> ArraySequence<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Grow the buffer if `extra` more elements would not fit.
    ///
    /// The new capacity is at least double the old one, so a run of
    /// appends touches the allocator O(log n) times.
    fn grow_for(&mut self, extra: usize) {
        let needed = self.items.len() + extra;
        if needed <= self.items.capacity() {
            return;
        }
        let target = needed.max(self.items.capacity() * 2).max(MIN_CAPACITY);
        self.items.reserve_exact(target - self.items.len());
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange(index));
        }
        Ok(())
    }
}

impl<T: Clone> ArraySequence<T> {
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T: Clone + 'static> Sequence<T> for ArraySequence<T> {
    fn append(&mut self, item: T) {
        self.grow_for(1);
        self.items.push(item);
    }

    fn prepend(&mut self, item: T) {
        self.grow_for(1);
        self.items.insert(0, item);
    }

    fn insert_at(&mut self, item: T, index: usize) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfRange(index));
        }
        self.grow_for(1);
        self.items.insert(index, item);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    fn erase_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    fn first(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyCollection)
    }

    fn last(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyCollection)
    }

    fn take_first(&self, count: usize) -> Result<Box<dyn Sequence<T>>> {
        if count > self.items.len() {
            return Err(Error::IndexOutOfRange(count));
        }
        Ok(Box::new(Self::from_slice(&self.items[..count])))
    }

    fn take_last(&self, count: usize) -> Result<Box<dyn Sequence<T>>> {
        if count > self.items.len() {
            return Err(Error::IndexOutOfRange(count));
        }
        Ok(Box::new(Self::from_slice(
            &self.items[self.items.len() - count..],
        )))
    }

    fn subsequence(&self, start: usize, end: usize) -> Result<Box<dyn Sequence<T>>> {
        if end >= self.items.len() {
            return Err(Error::IndexOutOfRange(end));
        }
        if start > end {
            return Err(Error::IndexOutOfRange(start));
        }
        Ok(Box::new(Self::from_slice(&self.items[start..=end])))
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
