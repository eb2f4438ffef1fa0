//! Contiguous growable list.
//!
//! This module provides [`ArrayList`], a list backed by a single contiguous
//! buffer.
//!
//! # Overview
//!
//! - O(1) indexed access and replacement
//! - O(1) amortized append
//! - O(n) insertion and order-preserving removal in the middle
//! - O(1) order-breaking removal with [`swap_remove`](List::swap_remove)
//! - Bulk transfers move whole ranges at once
//!
//! # Growth
//!
//! When an insertion does not fit, the capacity grows to the largest of the
//! required length, one and a half times the current capacity, and
//! [`ArrayList::DEFAULT_CAPACITY`]. The buffer never shrinks on removal; use
//! [`ArrayList::trim`] to release unused capacity.
//!
//! # Examples
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list = ArrayList::with_capacity(4);
//! for element in 0..4 {
//!     list.add(element).unwrap();
//! }
//! list.add(4).unwrap();
//! assert!(list.capacity() >= 10);
//!
//! list.remove_range(1, 4).unwrap();
//! assert_eq!(list.as_slice(), &[0, 4]);
//! assert!(list.trim(0));
//! assert_eq!(list.capacity(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, trace};

use super::contract::{List, Stack};
use super::sublist::Sublist;
use super::{display_sequence, hash_sequence};
use crate::error::{ListError, check_index, check_position, check_range};
use crate::iterator::{ArraySplitIter, ListCursor};

/// A list backed by one contiguous, geometrically growing buffer.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `get` / `set` | O(1) |
/// | `add` / `push` / `pop` | O(1) amortized |
/// | `insert` / `remove_at` | O(n - i) |
/// | `swap_remove` | O(1) |
/// | `remove_range` / `extract_elements` | O(n - from) |
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// let mut list: ArrayList<i32> = (1..=3).collect();
/// assert_eq!(list.set(1, 20), Ok(2));
/// assert_eq!(list.as_slice(), &[1, 20, 3]);
/// ```
#[derive(Clone, Default)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Capacity used by the first growth of an empty list.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates an empty list without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::prelude::*;
    ///
    /// let list: ArrayList<i32> = ArrayList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty list able to hold `capacity` elements without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of `elements` without copying.
    #[must_use]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements the buffer can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Grows the buffer so it can hold at least `capacity` elements.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity > self.elements.capacity() {
            self.grow(capacity - self.elements.len());
        }
    }

    /// Shrinks the buffer to `max(capacity, len())`.
    ///
    /// Returns `false` when the buffer is already that small.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::prelude::*;
    ///
    /// let mut list: ArrayList<i32> = ArrayList::with_capacity(32);
    /// list.add(1).unwrap();
    /// assert!(list.trim(8));
    /// assert_eq!(list.capacity(), 8);
    /// assert!(!list.trim(8));
    /// ```
    pub fn trim(&mut self, capacity: usize) -> bool {
        let target = capacity.max(self.elements.len());
        let current = self.elements.capacity();
        if target >= current {
            return false;
        }
        debug!("ArrayList trimming capacity from {current} to {target}");
        self.elements.shrink_to(target);
        true
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Consumes the list, returning its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes every element matching `predicate`, keeping the order of the
    /// rest. Returns `true` if anything was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlist::prelude::*;
    ///
    /// let mut list: ArrayList<i32> = (1..=6).collect();
    /// assert!(list.remove_if(|element| element % 2 == 0));
    /// assert_eq!(list.as_slice(), &[1, 3, 5]);
    /// ```
    pub fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(|element| !predicate(element));
        self.elements.len() != before
    }

    /// Replaces every element with the result of `operator`.
    pub fn replace_all<F>(&mut self, mut operator: F)
    where
        F: FnMut(&T) -> T,
    {
        for element in &mut self.elements {
            *element = operator(element);
        }
    }

    /// Sorts the elements with a comparator, keeping equal elements in order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.elements.sort_by(compare);
    }

    /// Sorts the elements in ascending order, keeping equal elements in order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.elements.sort();
    }

    fn grow(&mut self, additional: usize) {
        let length = self.elements.len();
        let capacity = self.elements.capacity();
        let required = length.saturating_add(additional);
        if required <= capacity {
            return;
        }
        let target = required
            .max(capacity + (capacity >> 1))
            .max(Self::DEFAULT_CAPACITY);
        trace!("ArrayList growing capacity from {capacity} to {target}");
        self.elements.reserve_exact(target - length);
    }
}

impl<T: Clone> ArrayList<T> {
    /// Creates a list holding clones of `elements`.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }
}

impl<T> List for ArrayList<T> {
    type Element = T;
    type Cursor<'c>
        = ListCursor<'c, Self>
    where
        Self: 'c;
    type SplitIter<'s>
        = ArraySplitIter<'s, T>
    where
        Self: 's;
    type View<'v>
        = Sublist<'v, Self>
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        check_index(index, self.elements.len())?;
        Ok(&self.elements[index])
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        check_index(index, self.elements.len())?;
        Ok(&mut self.elements[index])
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        Ok(std::mem::replace(self.get_mut(index)?, element))
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        check_position(index, self.elements.len())?;
        self.grow(1);
        self.elements.insert(index, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    fn swap_remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.elements.len())?;
        Ok(self.elements.swap_remove(index))
    }

    fn get_elements(&self, from: usize, buffer: &mut [T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        let to = from.saturating_add(buffer.len());
        check_range(from, to, self.elements.len())?;
        buffer.clone_from_slice(&self.elements[from..to]);
        Ok(())
    }

    fn add_elements(&mut self, index: usize, elements: &[T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        check_position(index, self.elements.len())?;
        self.grow(elements.len());
        self.elements
            .splice(index..index, elements.iter().cloned())
            .for_each(drop);
        Ok(())
    }

    fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        check_range(from, to, self.elements.len())?;
        self.elements.drain(from..to).for_each(drop);
        Ok(())
    }

    fn extract_elements(&mut self, from: usize, to: usize) -> Result<Vec<T>, ListError> {
        check_range(from, to, self.elements.len())?;
        Ok(self.elements.drain(from..to).collect())
    }

    fn resize(&mut self, new_len: usize, fill: T) -> Result<(), ListError>
    where
        T: Clone,
    {
        self.grow(new_len.saturating_sub(self.elements.len()));
        self.elements.resize(new_len, fill);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ListError> {
        self.elements.clear();
        Ok(())
    }

    fn cursor_at(&mut self, index: usize) -> Result<ListCursor<'_, Self>, ListError> {
        check_position(index, self.elements.len())?;
        Ok(ListCursor::new(self, index))
    }

    fn split_iter(&self) -> ArraySplitIter<'_, T> {
        ArraySplitIter::new(&self.elements)
    }

    fn split_range(&self, from: usize, to: usize) -> Result<ArraySplitIter<'_, T>, ListError> {
        check_range(from, to, self.elements.len())?;
        Ok(ArraySplitIter::new(&self.elements[from..to]))
    }

    fn subview(&mut self, from: usize, to: usize) -> Result<Sublist<'_, Self>, ListError> {
        check_range(from, to, self.elements.len())?;
        Ok(Sublist::new(self, from, to))
    }
}

impl<T> Stack for ArrayList<T> {
    fn push(&mut self, element: T) {
        self.grow(1);
        self.elements.push(element);
    }

    fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    fn peek(&self, depth: usize) -> Option<&T> {
        let index = self.elements.len().checked_sub(depth.checked_add(1)?)?;
        self.elements.get(index)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> From<ArrayList<T>> for Vec<T> {
    fn from(list: ArrayList<T>) -> Self {
        list.elements
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.grow(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self.elements.len(), &self.elements, state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, &self.elements)
    }
}

// =============================================================================
// Tests
// =============================================================================
