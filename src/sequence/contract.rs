//! The contract every list backing satisfies.

use std::hash::Hash;

use super::ordered_hash_code;
use crate::error::ListError;
use crate::iterator::{BidirectionalIterator, SplitIterator};

/// A 0-indexed sequence whose iteration order is its insertion order.
///
/// `List` is implemented by [`ArrayList`](super::ArrayList),
/// [`LinkedList`](super::LinkedList), [`ImmutableList`](super::ImmutableList)
/// and [`Sublist`](super::Sublist). Code written against `List` works with
/// any of them.
///
/// # Failure
///
/// Every operation validates its arguments before touching the list. A call
/// that returns `Err` leaves the list unchanged.
///
/// # Associated Types
///
/// - [`Cursor`](Self::Cursor): the bidirectional cursor returned by
///   [`cursor_at`](Self::cursor_at)
/// - [`SplitIter`](Self::SplitIter): the split iterator returned by
///   [`split_iter`](Self::split_iter)
/// - [`View`](Self::View): the sublist returned by [`subview`](Self::subview).
///   Views of views borrow the root list directly, so nesting never adds a
///   level of indirection.
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// fn sum<L: List<Element = i32>>(list: &L) -> i32 {
///     list.split_iter().sum()
/// }
///
/// let array: ArrayList<i32> = (1..=4).collect();
/// let linked: LinkedList<i32> = (1..=4).collect();
/// assert_eq!(sum(&array), sum(&linked));
/// assert!(array.content_eq(&linked));
/// ```
pub trait List {
    /// The element type.
    type Element;

    /// Bidirectional cursor over this list.
    type Cursor<'c>: BidirectionalIterator<Item = Self::Element>
    where
        Self: 'c;

    /// Split iterator over this list.
    type SplitIter<'s>: SplitIterator<Item = &'s Self::Element>
    where
        Self: 's;

    /// Sublist view over this list.
    type View<'v>: List<Element = Self::Element>
    where
        Self: 'v;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<&Self::Element, ListError>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Element, ListError>;

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn set(&mut self, index: usize, element: Self::Element) -> Result<Self::Element, ListError>;

    /// Inserts `element` at `index`, shifting later elements back.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index > len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn insert(&mut self, index: usize, element: Self::Element) -> Result<(), ListError>;

    /// Appends `element` at the end.
    ///
    /// # Errors
    ///
    /// [`ListError::Unsupported`] on immutable lists.
    fn add(&mut self, element: Self::Element) -> Result<(), ListError> {
        self.insert(self.len(), element)
    }

    /// Removes and returns the element at `index`, preserving order.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn remove_at(&mut self, index: usize) -> Result<Self::Element, ListError>;

    /// Removes and returns the element at `index`, moving the last element
    /// into its place. Does not preserve order.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn swap_remove(&mut self, index: usize) -> Result<Self::Element, ListError>;

    /// Clones `buffer.len()` elements starting at `from` into `buffer`.
    ///
    /// To fill `length` slots at `offset` of a larger array, pass
    /// `&mut array[offset..offset + length]`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidRange`] if `from + buffer.len() > len()`.
    fn get_elements(&self, from: usize, buffer: &mut [Self::Element]) -> Result<(), ListError>
    where
        Self::Element: Clone;

    /// Inserts clones of `elements` at `index`, keeping their order.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index > len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn add_elements(&mut self, index: usize, elements: &[Self::Element]) -> Result<(), ListError>
    where
        Self::Element: Clone;

    /// Removes the elements in `from..to`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidRange`] if `from > to` or `to > len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError>;

    /// Removes the elements in `from..to` and returns them in order.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidRange`] if `from > to` or `to > len()`,
    /// [`ListError::Unsupported`] on immutable lists.
    fn extract_elements(&mut self, from: usize, to: usize)
    -> Result<Vec<Self::Element>, ListError>;

    /// Grows the list to `new_len` with clones of `fill`, or truncates it
    /// from the tail.
    ///
    /// # Errors
    ///
    /// [`ListError::Unsupported`] on immutable lists.
    fn resize(&mut self, new_len: usize, fill: Self::Element) -> Result<(), ListError>
    where
        Self::Element: Clone;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// [`ListError::Unsupported`] on immutable lists.
    fn clear(&mut self) -> Result<(), ListError>;

    /// Returns a cursor positioned before the first element.
    fn cursor(&mut self) -> Self::Cursor<'_> {
        match self.cursor_at(0) {
            Ok(cursor) => cursor,
            Err(_) => unreachable!("position 0 is valid for every length"),
        }
    }

    /// Returns a cursor positioned before the element at `index`.
    ///
    /// `cursor_at(len())` starts after the last element, ready for reverse
    /// traversal with [`previous`](BidirectionalIterator::previous).
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index > len()`.
    fn cursor_at(&mut self, index: usize) -> Result<Self::Cursor<'_>, ListError>;

    /// Returns a split iterator over every element.
    fn split_iter(&self) -> Self::SplitIter<'_>;

    /// Returns a split iterator over the elements in `from..to`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidRange`] if `from > to` or `to > len()`.
    fn split_range(&self, from: usize, to: usize) -> Result<Self::SplitIter<'_>, ListError>;

    /// Returns a view of the elements in `from..to`.
    ///
    /// The view copies nothing. Reads and writes through it are translated
    /// to the parent, and structural changes made through it are reflected
    /// in the length of the parent and of every enclosing view.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidRange`] if `from > to` or `to > len()`.
    fn subview(&mut self, from: usize, to: usize) -> Result<Self::View<'_>, ListError>;

    /// Returns `true` if some element equals `element`.
    fn contains(&self, element: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Returns the index of the first element equal to `element`.
    fn index_of(&self, element: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.split_iter().position(|candidate| candidate == element)
    }

    /// Returns the index of the last element equal to `element`.
    fn last_index_of(&self, element: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.split_iter()
            .enumerate()
            .filter(|(_, candidate)| *candidate == element)
            .last()
            .map(|(index, _)| index)
    }

    /// Returns `true` if both lists have the same length and pairwise equal
    /// elements, regardless of backing.
    fn content_eq<O: List>(&self, other: &O) -> bool
    where
        Self::Element: PartialEq<O::Element>,
    {
        self.len() == other.len()
            && self
                .split_iter()
                .zip(other.split_iter())
                .all(|(left, right)| left == right)
    }

    /// Order-sensitive hash code: `h = 31 * h + hash(element)` starting
    /// from 1, with wrapping arithmetic.
    ///
    /// Equal lists produce equal hash codes regardless of backing.
    fn hash_code(&self) -> u64
    where
        Self::Element: Hash,
    {
        ordered_hash_code(self.split_iter())
    }
}

/// Last-in, first-out access at the end of a list.
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// let mut stack: ArrayList<i32> = ArrayList::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.peek(1), Some(&1));
/// assert_eq!(stack.pop(), Some(2));
/// ```
pub trait Stack: List {
    /// Pushes `element` on top.
    fn push(&mut self, element: Self::Element);

    /// Pops the top element.
    fn pop(&mut self) -> Option<Self::Element>;

    /// Returns the element `depth` positions below the top.
    fn peek(&self, depth: usize) -> Option<&Self::Element>;

    /// Returns the top element.
    fn top(&self) -> Option<&Self::Element> {
        self.peek(0)
    }
}

/// Constant-time access at both ends.
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// let mut deque: LinkedList<i32> = LinkedList::new();
/// deque.push_back(1);
/// deque.push_front(0);
/// assert_eq!(deque.first(), Some(&0));
/// assert_eq!(deque.pop_back(), Some(1));
/// ```
pub trait Deque: List {
    /// Inserts `element` before the first element.
    fn push_front(&mut self, element: Self::Element);

    /// Inserts `element` after the last element.
    fn push_back(&mut self, element: Self::Element);

    /// Removes and returns the first element.
    fn pop_front(&mut self) -> Option<Self::Element>;

    /// Removes and returns the last element.
    fn pop_back(&mut self) -> Option<Self::Element>;

    /// Returns the first element.
    fn first(&self) -> Option<&Self::Element>;

    /// Returns the last element.
    fn last(&self) -> Option<&Self::Element>;
}
