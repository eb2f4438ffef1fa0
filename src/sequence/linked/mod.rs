//! Doubly linked list.
//!
//! [`LinkedList`] keeps its nodes in a generation-checked arena and links
//! them by handle, so splicing is constant-time once the position is known
//! and the structure stays free of `unsafe`.
//!
//! # Positional access
//!
//! Locating index `i` walks from the head when `i < len / 4` and from the
//! tail otherwise. Range removal walks from whichever end of the range is
//! closer to its end of the list.
//!
//! # Examples
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list: LinkedList<i32> = (0..6).collect();
//! list.remove_range(1, 3).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 3, 4, 5]);
//!
//! list.push_front(-1);
//! assert_eq!(list.first(), Some(&-1));
//! assert_eq!(list.pop_back(), Some(5));
//! ```

mod arena;
mod cursor;
mod split;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use log::{debug, trace};

use self::arena::{Node, NodeArena, NodeHandle};
use super::contract::{Deque, List, Stack};
use super::sublist::Sublist;
use super::{display_sequence, hash_sequence};
use crate::error::{ListError, check_position, check_range};
use crate::iterator::SplitPolicy;

pub use cursor::LinkedCursor;
pub use split::LinkedSplitIter;

/// A doubly linked list with O(1) access at both ends.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push_front` / `push_back` / `pop_front` / `pop_back` | O(1) |
/// | `get` / `set` / `insert` / `remove_at` | O(i) when `i < n / 4`, else O(n - i) |
/// | cursor `next` / `previous` / `remove` / `add` | O(1) |
/// | `remove_range(from, to)` | O(min(from, n - to) + (to - from)) |
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
/// assert_eq!(list, ArrayList::from_slice(&[0, 1, 2]));
/// ```
pub struct LinkedList<T> {
    arena: NodeArena<T>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    length: usize,
}

/// Which end a range removal started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Forward,
    Backward,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates an empty list with node storage for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns a front-to-back iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    /// Returns a split iterator that batches with `policy` instead of the
    /// default [`SplitPolicy`].
    #[must_use]
    pub fn split_iter_with(&self, policy: SplitPolicy) -> LinkedSplitIter<'_, T> {
        LinkedSplitIter::new(&self.arena, self.head, self.length, policy)
    }

    /// Applies `action` to every element in order.
    pub fn for_each_mut<F>(&mut self, mut action: F)
    where
        F: FnMut(&mut T),
    {
        let mut current = self.head;
        while let Some(handle) = current {
            let node = &mut self.arena[handle];
            action(&mut node.element);
            current = node.next;
        }
    }

    /// Replaces every element with the result of `operator`.
    pub fn replace_all<F>(&mut self, mut operator: F)
    where
        F: FnMut(&T) -> T,
    {
        self.for_each_mut(|element| *element = operator(element));
    }

    /// Unlinks every element matching `predicate`. Returns `true` if
    /// anything was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::prelude::*;
    ///
    /// let mut list: LinkedList<i32> = (1..=6).collect();
    /// assert!(list.remove_if(|element| element % 3 == 0));
    /// assert_eq!(list, ArrayList::from_slice(&[1, 2, 4, 5]));
    /// ```
    pub fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.length;
        let mut current = self.head;
        while let Some(handle) = current {
            let node = &self.arena[handle];
            current = node.next;
            if predicate(&node.element) {
                self.unlink(handle);
            }
        }
        self.length != before
    }

    // =========================================================================
    // Node plumbing
    // =========================================================================

    /// Finds the node at `index`, or `None` past the end.
    fn node_at(&self, index: usize) -> Option<NodeHandle> {
        if index >= self.length {
            return None;
        }
        if index < (self.length >> 2) {
            let mut handle = self.head?;
            for _ in 0..index {
                handle = self.arena[handle].next?;
            }
            Some(handle)
        } else {
            let mut handle = self.tail?;
            for _ in index + 1..self.length {
                handle = self.arena[handle].previous?;
            }
            Some(handle)
        }
    }

    fn locate(&self, index: usize) -> Result<NodeHandle, ListError> {
        self.node_at(index).ok_or(ListError::IndexOutOfBounds {
            index,
            length: self.length,
        })
    }

    fn link_first(&mut self, element: T) -> NodeHandle {
        let handle = self.arena.insert(Node {
            element,
            previous: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.arena[head].previous = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.length += 1;
        handle
    }

    fn link_last(&mut self, element: T) -> NodeHandle {
        let handle = self.arena.insert(Node {
            element,
            previous: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.arena[tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.length += 1;
        handle
    }

    /// Links `element` immediately before `successor`.
    fn link_before(&mut self, element: T, successor: NodeHandle) -> NodeHandle {
        let predecessor = self.arena[successor].previous;
        let handle = self.arena.insert(Node {
            element,
            previous: predecessor,
            next: Some(successor),
        });
        self.arena[successor].previous = Some(handle);
        match predecessor {
            Some(predecessor) => self.arena[predecessor].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.length += 1;
        handle
    }

    fn unlink(&mut self, handle: NodeHandle) -> T {
        let Some(node) = self.arena.remove(handle) else {
            unreachable!("unlinking a node that is not in the list")
        };
        match node.previous {
            Some(previous) => self.arena[previous].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.arena[next].previous = node.previous,
            None => self.tail = node.previous,
        }
        self.length -= 1;
        node.element
    }

    fn unlink_first(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    fn unlink_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Unlinks `from..to`, handing each element to `sink`.
    ///
    /// Elements reach `sink` in list order for [`Walk::Forward`] and in
    /// reverse order for [`Walk::Backward`]. The caller validates the range.
    fn unlink_range<F>(&mut self, from: usize, to: usize, mut sink: F) -> Walk
    where
        F: FnMut(T),
    {
        let count = to - from;
        let walk = if from <= self.length - to {
            Walk::Forward
        } else {
            Walk::Backward
        };
        trace!("LinkedList unlinking {from}..{to} walking {walk:?}");
        let mut current = match walk {
            Walk::Forward => self.node_at(from),
            Walk::Backward => to.checked_sub(1).and_then(|last| self.node_at(last)),
        };
        for _ in 0..count {
            let Some(handle) = current else {
                unreachable!("range {from}..{to} ran off the list")
            };
            let node = &self.arena[handle];
            current = match walk {
                Walk::Forward => node.next,
                Walk::Backward => node.previous,
            };
            sink(self.unlink(handle));
        }
        walk
    }
}

impl<T> List for LinkedList<T> {
    type Element = T;
    type Cursor<'c>
        = LinkedCursor<'c, T>
    where
        Self: 'c;
    type SplitIter<'s>
        = LinkedSplitIter<'s, T>
    where
        Self: 's;
    type View<'v>
        = Sublist<'v, Self>
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.length
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let handle = self.locate(index)?;
        Ok(&self.arena[handle].element)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let handle = self.locate(index)?;
        Ok(&mut self.arena[handle].element)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        Ok(std::mem::replace(self.get_mut(index)?, element))
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        check_position(index, self.length)?;
        if index == self.length {
            self.link_last(element);
        } else {
            let successor = self.locate(index)?;
            self.link_before(element, successor);
        }
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let handle = self.locate(index)?;
        Ok(self.unlink(handle))
    }

    fn swap_remove(&mut self, index: usize) -> Result<T, ListError> {
        let handle = self.locate(index)?;
        if self.tail == Some(handle) {
            return Ok(self.unlink(handle));
        }
        let Some(last) = self.unlink_last() else {
            unreachable!("non-empty list without a tail")
        };
        Ok(std::mem::replace(&mut self.arena[handle].element, last))
    }

    fn get_elements(&self, from: usize, buffer: &mut [T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        let to = from.saturating_add(buffer.len());
        check_range(from, to, self.length)?;
        let source = LinkedListIterator {
            arena: &self.arena,
            front: self.node_at(from),
            back: self.tail,
            remaining: to - from,
        };
        for (slot, element) in buffer.iter_mut().zip(source) {
            slot.clone_from(element);
        }
        Ok(())
    }

    fn add_elements(&mut self, index: usize, elements: &[T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        check_position(index, self.length)?;
        match self.node_at(index) {
            Some(successor) => {
                for element in elements {
                    self.link_before(element.clone(), successor);
                }
            }
            None => {
                for element in elements {
                    self.link_last(element.clone());
                }
            }
        }
        Ok(())
    }

    fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        check_range(from, to, self.length)?;
        self.unlink_range(from, to, drop);
        Ok(())
    }

    fn extract_elements(&mut self, from: usize, to: usize) -> Result<Vec<T>, ListError> {
        check_range(from, to, self.length)?;
        let mut extracted = Vec::with_capacity(to - from);
        if self.unlink_range(from, to, |element| extracted.push(element)) == Walk::Backward {
            extracted.reverse();
        }
        Ok(extracted)
    }

    fn resize(&mut self, new_len: usize, fill: T) -> Result<(), ListError>
    where
        T: Clone,
    {
        if new_len < self.length {
            self.unlink_range(new_len, self.length, drop);
        } else {
            for _ in self.length..new_len {
                self.link_last(fill.clone());
            }
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ListError> {
        debug!("LinkedList clearing {} elements", self.length);
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
        Ok(())
    }

    fn cursor_at(&mut self, index: usize) -> Result<LinkedCursor<'_, T>, ListError> {
        check_position(index, self.length)?;
        Ok(LinkedCursor::new(self, index))
    }

    fn split_iter(&self) -> LinkedSplitIter<'_, T> {
        self.split_iter_with(SplitPolicy::default())
    }

    fn split_range(&self, from: usize, to: usize) -> Result<LinkedSplitIter<'_, T>, ListError> {
        check_range(from, to, self.length)?;
        Ok(LinkedSplitIter::new(
            &self.arena,
            self.node_at(from),
            to - from,
            SplitPolicy::default(),
        ))
    }

    fn subview(&mut self, from: usize, to: usize) -> Result<Sublist<'_, Self>, ListError> {
        check_range(from, to, self.length)?;
        Ok(Sublist::new(self, from, to))
    }
}

impl<T> Deque for LinkedList<T> {
    fn push_front(&mut self, element: T) {
        self.link_first(element);
    }

    fn push_back(&mut self, element: T) {
        self.link_last(element);
    }

    fn pop_front(&mut self) -> Option<T> {
        self.unlink_first()
    }

    fn pop_back(&mut self) -> Option<T> {
        self.unlink_last()
    }

    fn first(&self) -> Option<&T> {
        self.head.map(|head| &self.arena[head].element)
    }

    fn last(&self) -> Option<&T> {
        self.tail.map(|tail| &self.arena[tail].element)
    }
}

/// The top of the stack is the back of the list.
impl<T> Stack for LinkedList<T> {
    fn push(&mut self, element: T) {
        self.link_last(element);
    }

    fn pop(&mut self) -> Option<T> {
        self.unlink_last()
    }

    fn peek(&self, depth: usize) -> Option<&T> {
        let index = self.length.checked_sub(depth.checked_add(1)?)?;
        self.node_at(index).map(|handle| &self.arena[handle].element)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    arena: &'a NodeArena<T>,
    front: Option<NodeHandle>,
    back: Option<NodeHandle>,
    remaining: usize,
}

impl<T> Clone for LinkedListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for LinkedListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.back?];
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {}

impl<T> FusedIterator for LinkedListIterator<'_, T> {}

/// Owning iterator over a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.unlink_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> DoubleEndedIterator for LinkedListIntoIterator<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.unlink_last()
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {}

impl<T> FusedIterator for LinkedListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies every element into a fresh list, so the copy shares no nodes with
/// the original.
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for element in iter {
            list.link_last(element);
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.link_last(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self.length, self.iter(), state);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

// =============================================================================
// Tests
// =============================================================================
