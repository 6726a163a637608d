//! Sequence containers: the growable building blocks of the crate.
//!
//! ## Architecture
//!
//! Two interchangeable backends implement the [`Sequence`] trait:
//!
//! - [`ArraySequence`]: contiguous storage, O(1) amortized append,
//!   O(n) insert/erase in the middle
//! - [`ListSequence`]: doubly-linked list over a slab arena, O(1) at
//!   both ends, O(n) indexed access
//!
//! Both produce identical externally observed behavior for every trait
//! operation; only the performance profile differs. Callers that do not
//! care about the backend program against `dyn Sequence<T>`.
//!
//! [`SortedSequence`] layers an ordering relation on top of the array
//! backend and adds binary-search lookup and insertion.
//!
//! ## Slicing
//!
//! `take_first`/`take_last`/`subsequence` return new independent
//! sequences (copies, not aliases). Mutating a slice never touches the
//! sequence it was cut from.

pub mod array;
pub mod linked;
pub mod sorted;

pub use array::ArraySequence;
pub use linked::ListSequence;
pub use sorted::SortedSequence;

use crate::error::{Error, Result};

/// Ordered, index-addressable collection of `T`.
///
/// The index contract is uniform across operations: insertion accepts
/// `0 <= index <= len`, access and erase accept `0 <= index < len`, and
/// any violation fails with [`Error::IndexOutOfRange`] leaving the
/// sequence unchanged.
pub trait Sequence<T: Clone + 'static> {
    /// Add an item after the last element.
    fn append(&mut self, item: T);

    /// Add an item before the first element.
    fn prepend(&mut self, item: T);

    /// Insert an item so that it ends up at `index`.
    fn insert_at(&mut self, item: T, index: usize) -> Result<()>;

    /// Borrow the item at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Mutably borrow the item at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replace the item at `index`.
    fn set(&mut self, item: T, index: usize) -> Result<()> {
        *self.get_mut(index)? = item;
        Ok(())
    }

    /// Remove and return the item at `index`.
    fn erase_at(&mut self, index: usize) -> Result<T>;

    /// Borrow the first element.
    fn first(&self) -> Result<&T>;

    /// Borrow the last element.
    fn last(&self) -> Result<&T>;

    /// Copy the first `count` elements into a new sequence of the same
    /// backend. Fails when `count > len`.
    fn take_first(&self, count: usize) -> Result<Box<dyn Sequence<T>>>;

    /// Copy the last `count` elements into a new sequence of the same
    /// backend. Fails when `count > len`.
    fn take_last(&self, count: usize) -> Result<Box<dyn Sequence<T>>>;

    /// Copy the inclusive range `[start, end]` into a new sequence of
    /// the same backend.
    fn subsequence(&self, start: usize, end: usize) -> Result<Box<dyn Sequence<T>>>;

    /// Remove every element. Capacity is retained where the backend has
    /// one.
    fn clear(&mut self);

    /// Number of live elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage capacity. The array backend reports its allocation; the
    /// linked backend reports its length.
    fn capacity(&self) -> usize;

    /// Forward iterator over the elements in index order.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Cursor-style forward traversal over the elements.
    fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.iter())
    }
}

/// Cursor adapter over any sequence iterator.
///
/// A cursor sits *on* an element (or past the end) rather than between
/// elements: `current` reads the element under the cursor, `advance`
/// moves one step forward. Mutating the underlying sequence invalidates
/// the cursor; the borrow checker enforces this.
pub struct Cursor<'a, T> {
    iter: Box<dyn Iterator<Item = &'a T> + 'a>,
    current: Option<&'a T>,
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(mut iter: Box<dyn Iterator<Item = &'a T> + 'a>) -> Self {
        let current = iter.next();
        Self {
            iter,
            current,
            pos: 0,
        }
    }

    /// True while the cursor sits on a live element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// The element under the cursor, failing once exhausted.
    pub fn current(&self) -> Result<&'a T> {
        self.current.ok_or(Error::IndexOutOfRange(self.pos))
    }

    /// The element under the cursor, or `None` once exhausted.
    #[inline]
    pub fn try_current(&self) -> Option<&'a T> {
        self.current
    }

    /// Step forward. Returns whether the cursor still sits on an
    /// element afterwards.
    pub fn advance(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.current = self.iter.next();
        self.pos += 1;
        self.current.is_some()
    }
}

#[cfg(test)]
pub(crate) fn collect<T: Clone + 'static>(seq: &dyn Sequence<T>) -> Vec<T> {
    seq.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_all_elements() {
        let seq = ArraySequence::from_slice(&[10, 20, 30]);
        let mut cursor = Sequence::cursor(&seq);

        assert!(cursor.has_next());
        assert_eq!(cursor.current(), Ok(&10));
        assert!(cursor.advance());
        assert_eq!(cursor.try_current(), Some(&20));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&30));
        assert!(!cursor.advance());
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_current(), None);
        assert_eq!(cursor.current(), Err(Error::IndexOutOfRange(3)));
        assert!(!cursor.advance());
    }

    #[test]
    fn test_cursor_on_empty_sequence() {
        let seq: ArraySequence<i32> = ArraySequence::new();
        let cursor = Sequence::cursor(&seq);

        assert!(!cursor.has_next());
        assert_eq!(cursor.try_current(), None);
        assert_eq!(cursor.current(), Err(Error::IndexOutOfRange(0)));
    }
}
