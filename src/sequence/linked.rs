//! Doubly-linked sequence backend over a slab arena.
//!
//! ## Design
//!
//! Nodes live in a `Slab` and point at each other through `usize` slab
//! keys instead of references, so splicing never fights the borrow
//! checker and removal from either end is O(1).
//!
//! ## Node Structure
//!
//! ```text
//! head (index 0) <-> node <-> node <-> tail (index len-1)
//! ```
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! Indexed access walks the links from whichever end is closer, so
//! `get(i)` is O(min(i, len - i)).

use slab::Slab;

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// A list node stored in the slab.
///
/// The `prev`/`next` pointers are slab keys, not direct references.
#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Linked sequence: O(1) append/prepend and end removal, O(n) indexed
/// access and middle splicing.
///
/// # Example
///
/// ```
/// use alphadex::sequence::{ListSequence, Sequence};
///
/// let mut seq = ListSequence::new();
/// seq.append("b");
/// seq.prepend("a");
/// seq.append("c");
///
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.first(), Ok(&"a"));
/// assert_eq!(seq.last(), Ok(&"c"));
/// ```
#[derive(Debug, Clone)]
pub struct ListSequence<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> ListSequence<T> {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty sequence with `capacity` node slots
    /// pre-allocated in the slab.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Slab key of the node at `index`, walking from the nearer end.
    fn key_at(&self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange(index));
        }
        if index <= self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = key.and_then(|k| self.nodes[k].next);
            }
            key.ok_or(Error::IndexOutOfRange(index))
        } else {
            let mut key = self.tail;
            for _ in 0..(self.len - 1 - index) {
                key = key.and_then(|k| self.nodes[k].prev);
            }
            key.ok_or(Error::IndexOutOfRange(index))
        }
    }

    /// Unlink the node at `key` and return its item.
    fn unlink(&mut self, key: usize) -> T {
        let (prev_key, next_key) = {
            let node = &self.nodes[key];
            (node.prev, node.next)
        };

        match prev_key {
            Some(prev) => self.nodes[prev].next = next_key,
            None => self.head = next_key,
        }
        match next_key {
            Some(next) => self.nodes[next].prev = prev_key,
            None => self.tail = prev_key,
        }

        self.len -= 1;
        self.nodes.remove(key).item
    }

    /// Insert a new node before the node at `before`.
    fn link_before(&mut self, item: T, before: usize) {
        let prev_key = self.nodes[before].prev;
        let key = self.nodes.insert(Node {
            item,
            prev: prev_key,
            next: Some(before),
        });
        self.nodes[before].prev = Some(key);
        match prev_key {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        self.len += 1;
    }

    fn push_back(&mut self, item: T) {
        let key = self.nodes.insert(Node {
            item,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.len += 1;
    }

    fn push_front(&mut self, item: T) {
        let key = self.nodes.insert(Node {
            item,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.len += 1;
    }

    /// Forward iterator following the links from the head.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            nodes: &self.nodes,
            next: self.head,
        }
    }
}

impl<T: Clone> ListSequence<T> {
    pub fn from_slice(items: &[T]) -> Self {
        let mut seq = Self::with_capacity(items.len());
        for item in items {
            seq.push_back(item.clone());
        }
        seq
    }
}

impl<T> Default for ListSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward iterator over a [`ListSequence`].
pub struct ListIter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    next: Option<usize>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let key = self.next?;
        let node = &self.nodes[key];
        self.next = node.next;
        Some(&node.item)
    }
}

impl<T: Clone + 'static> Sequence<T> for ListSequence<T> {
    fn append(&mut self, item: T) {
        self.push_back(item);
    }

    fn prepend(&mut self, item: T) {
        self.push_front(item);
    }

    fn insert_at(&mut self, item: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfRange(index));
        }
        if index == self.len {
            self.push_back(item);
        } else if index == 0 {
            self.push_front(item);
        } else {
            let before = self.key_at(index)?;
            self.link_before(item, before);
        }
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T> {
        let key = self.key_at(index)?;
        Ok(&self.nodes[key].item)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let key = self.key_at(index)?;
        Ok(&mut self.nodes[key].item)
    }

    fn erase_at(&mut self, index: usize) -> Result<T> {
        let key = self.key_at(index)?;
        Ok(self.unlink(key))
    }

    fn first(&self) -> Result<&T> {
        let key = self.head.ok_or(Error::EmptyCollection)?;
        Ok(&self.nodes[key].item)
    }

    fn last(&self) -> Result<&T> {
        let key = self.tail.ok_or(Error::EmptyCollection)?;
        Ok(&self.nodes[key].item)
    }

    fn take_first(&self, count: usize) -> Result<Box<dyn Sequence<T>>> {
        if count > self.len {
            return Err(Error::IndexOutOfRange(count));
        }
        let mut out = Self::with_capacity(count);
        for item in self.iter().take(count) {
            out.push_back(item.clone());
        }
        Ok(Box::new(out))
    }

    fn take_last(&self, count: usize) -> Result<Box<dyn Sequence<T>>> {
        if count > self.len {
            return Err(Error::IndexOutOfRange(count));
        }
        let mut out = Self::with_capacity(count);
        for item in self.iter().skip(self.len - count) {
            out.push_back(item.clone());
        }
        Ok(Box::new(out))
    }

    fn subsequence(&self, start: usize, end: usize) -> Result<Box<dyn Sequence<T>>> {
        if end >= self.len {
            return Err(Error::IndexOutOfRange(end));
        }
        if start > end {
            return Err(Error::IndexOutOfRange(start));
        }
        let mut out = Self::with_capacity(end - start + 1);
        for item in self.iter().skip(start).take(end - start + 1) {
            out.push_back(item.clone());
        }
        Ok(Box::new(out))
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    /// The linked backend has no spare slots to report; capacity equals
    /// length.
    #[inline]
    fn capacity(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(ListSequence::iter(self))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
