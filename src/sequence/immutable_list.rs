//! Fixed-content list.
//!
//! [`ImmutableList`] answers every read the way any other list does, and
//! rejects every mutation with [`ListError::Unsupported`], leaving its
//! contents untouched. It is useful where a `List` is expected but the
//! caller must not be able to change it.
//!
//! # Examples
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list = ImmutableList::from_vec(vec![1, 2, 3]);
//! assert_eq!(list.get(1), Ok(&2));
//! assert!(list.add(4).is_err());
//! assert!(list.clear().is_err());
//! assert_eq!(list.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::array_list::ArrayList;
use super::contract::List;
use super::sublist::Sublist;
use super::{display_sequence, hash_sequence};
use crate::error::{ListError, check_index, check_position, check_range};
use crate::iterator::{ArraySplitIter, ListCursor};

/// A list whose contents never change after construction.
#[derive(Clone, Default)]
pub struct ImmutableList<T> {
    elements: Box<[T]>,
}

const fn unsupported(operation: &'static str) -> ListError {
    ListError::Unsupported { operation }
}

impl<T> ImmutableList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: Box::default(),
        }
    }

    /// Freezes `elements`.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone> ImmutableList<T> {
    /// Creates a list holding clones of `elements`.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T> List for ImmutableList<T> {
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

    fn get_mut(&mut self, _index: usize) -> Result<&mut T, ListError> {
        Err(unsupported("get_mut"))
    }

    fn set(&mut self, _index: usize, _element: T) -> Result<T, ListError> {
        Err(unsupported("set"))
    }

    fn insert(&mut self, _index: usize, _element: T) -> Result<(), ListError> {
        Err(unsupported("insert"))
    }

    fn remove_at(&mut self, _index: usize) -> Result<T, ListError> {
        Err(unsupported("remove_at"))
    }

    fn swap_remove(&mut self, _index: usize) -> Result<T, ListError> {
        Err(unsupported("swap_remove"))
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

    fn add_elements(&mut self, _index: usize, _elements: &[T]) -> Result<(), ListError>
    where
        T: Clone,
    {
        Err(unsupported("add_elements"))
    }

    fn remove_range(&mut self, _from: usize, _to: usize) -> Result<(), ListError> {
        Err(unsupported("remove_range"))
    }

    fn extract_elements(&mut self, _from: usize, _to: usize) -> Result<Vec<T>, ListError> {
        Err(unsupported("extract_elements"))
    }

    fn resize(&mut self, _new_len: usize, _fill: T) -> Result<(), ListError>
    where
        T: Clone,
    {
        Err(unsupported("resize"))
    }

    fn clear(&mut self) -> Result<(), ListError> {
        Err(unsupported("clear"))
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

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> From<ArrayList<T>> for ImmutableList<T> {
    fn from(list: ArrayList<T>) -> Self {
        Self::from_vec(list.into_vec())
    }
}

impl<T> AsRef<[T]> for ImmutableList<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self.elements.len(), self.elements.iter(), state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.elements.iter())
    }
}
