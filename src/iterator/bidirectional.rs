//! Bidirectional, mutation-capable cursors.
//!
//! A cursor sits *between* elements: at position `p` in `[0, len]`,
//! [`next`](BidirectionalIterator::next) yields the element at `p` and
//! [`previous`](BidirectionalIterator::previous) yields the element at
//! `p - 1`. The cursor remembers the element it yielded last so that
//! [`remove`](BidirectionalIterator::remove) and
//! [`set`](BidirectionalIterator::set) can act on it.
//!
//! ```text
//!         previous()      next()
//!            <-------  |  ------->
//!   [ a ]  [ b ]  [ c ] ^ [ d ]  [ e ]
//!                       p = 3
//! ```

use crate::error::ListError;
use crate::sequence::List;

/// A cursor that walks a list in both directions and edits it in place.
///
/// # Yield discipline
///
/// `remove` and `set` act on the element returned by the most recent
/// `next` or `previous`. After a `remove` or an `add` there is no such
/// element until the cursor yields again; calling `remove` or `set` in that
/// state fails with [`ListError::IllegalState`] and leaves the list as it was.
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// let mut list: ArrayList<i32> = (1..=4).collect();
/// {
///     let mut cursor = list.cursor();
///
///     assert_eq!(cursor.next(), Some(&1));
///     assert_eq!(cursor.next(), Some(&2));
///     assert_eq!(cursor.remove(), Ok(2));
///     assert!(cursor.remove().is_err());
///     assert_eq!(cursor.next(), Some(&3));
/// }
///
/// assert_eq!(list.as_slice(), &[1, 3, 4]);
/// ```
pub trait BidirectionalIterator {
    /// The element type of the underlying list.
    type Item;

    /// Returns `true` if [`next`](Self::next) would yield an element.
    fn has_next(&self) -> bool;

    /// Returns `true` if [`previous`](Self::previous) would yield an element.
    fn has_previous(&self) -> bool;

    /// Yields the element after the cursor and moves past it.
    ///
    /// Returns `None` when the cursor is already after the last element.
    fn next(&mut self) -> Option<&Self::Item>;

    /// Moves before the element preceding the cursor and yields it.
    ///
    /// Returns `None` when the cursor is already before the first element.
    fn previous(&mut self) -> Option<&Self::Item>;

    /// The index of the element [`next`](Self::next) would yield.
    fn next_index(&self) -> usize;

    /// The index of the element [`previous`](Self::previous) would yield, or
    /// `None` at the start of the list.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Removes the most recently yielded element from the list.
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalState`] if nothing was yielded since the last
    /// `remove`/`add`, or any error of the underlying list.
    fn remove(&mut self) -> Result<Self::Item, ListError>;

    /// Replaces the most recently yielded element, returning the old value.
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalState`] if nothing was yielded since the last
    /// `remove`/`add`, or any error of the underlying list.
    fn set(&mut self, element: Self::Item) -> Result<Self::Item, ListError>;

    /// Inserts an element before the cursor and moves past it.
    ///
    /// # Errors
    ///
    /// Any error of the underlying list.
    fn add(&mut self, element: Self::Item) -> Result<(), ListError>;

    /// Advances by up to `count` elements, returning how many were skipped.
    ///
    /// Equivalent to calling [`next`](Self::next) that many times.
    fn skip(&mut self, count: usize) -> usize;

    /// Retreats by up to `count` elements, returning how many were passed.
    ///
    /// Equivalent to calling [`previous`](Self::previous) that many times.
    fn back(&mut self, count: usize) -> usize;
}

/// Which element a cursor yielded last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LastYielded<P> {
    /// Nothing was yielded since construction or the last `remove`/`add`.
    Cleared,
    /// The element at this position was yielded last.
    At(P),
}

/// An index-based cursor over any [`List`].
///
/// Used by [`ArrayList`](crate::sequence::ArrayList),
/// [`ImmutableList`](crate::sequence::ImmutableList) and
/// [`Sublist`](crate::sequence::Sublist). Every step is a `get` on the list,
/// so stepping costs whatever indexed access costs on the backing.
pub struct ListCursor<'a, L: List> {
    list: &'a mut L,
    position: usize,
    last: LastYielded<usize>,
}

impl<'a, L: List> ListCursor<'a, L> {
    /// The caller guarantees `position <= list.len()`.
    pub(crate) const fn new(list: &'a mut L, position: usize) -> Self {
        Self {
            list,
            position,
            last: LastYielded::Cleared,
        }
    }
}

impl<L: List> BidirectionalIterator for ListCursor<'_, L> {
    type Item = L::Element;

    fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    fn has_previous(&self) -> bool {
        self.position > 0
    }

    fn next(&mut self) -> Option<&L::Element> {
        let index = self.position;
        if index >= self.list.len() {
            return None;
        }
        self.position += 1;
        self.last = LastYielded::At(index);
        self.list.get(index).ok()
    }

    fn previous(&mut self) -> Option<&L::Element> {
        let index = self.position.checked_sub(1)?;
        self.position = index;
        self.last = LastYielded::At(index);
        self.list.get(index).ok()
    }

    fn next_index(&self) -> usize {
        self.position
    }

    fn remove(&mut self) -> Result<L::Element, ListError> {
        let LastYielded::At(index) = self.last else {
            return Err(ListError::IllegalState {
                operation: "remove",
            });
        };
        let removed = self.list.remove_at(index)?;
        if index < self.position {
            self.position -= 1;
        }
        self.last = LastYielded::Cleared;
        Ok(removed)
    }

    fn set(&mut self, element: L::Element) -> Result<L::Element, ListError> {
        match self.last {
            LastYielded::At(index) => self.list.set(index, element),
            LastYielded::Cleared => Err(ListError::IllegalState { operation: "set" }),
        }
    }

    fn add(&mut self, element: L::Element) -> Result<(), ListError> {
        self.list.insert(self.position, element)?;
        self.position += 1;
        self.last = LastYielded::Cleared;
        Ok(())
    }

    fn skip(&mut self, count: usize) -> usize {
        let steps = count.min(self.list.len().saturating_sub(self.position));
        if steps > 0 {
            self.position += steps;
            self.last = LastYielded::At(self.position - 1);
        }
        steps
    }

    fn back(&mut self, count: usize) -> usize {
        let steps = count.min(self.position);
        if steps > 0 {
            self.position -= steps;
            self.last = LastYielded::At(self.position);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{ArrayList, ImmutableList};
    use rstest::rstest;

    fn list_of(elements: &[i32]) -> ArrayList<i32> {
        ArrayList::from_slice(elements)
    }

    #[rstest]
    fn test_indices_start_consistent() {
        let mut list = list_of(&[1, 2, 3]);
        let cursor = list.cursor();
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.previous_index(), None);
    }

    #[rstest]
    fn test_cursor_at_end_walks_backward() {
        let mut list = list_of(&[1, 2, 3]);
        let mut cursor = list.cursor_at(3).unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.previous(), Some(&3));
        assert_eq!(cursor.previous(), Some(&2));
        assert_eq!(cursor.previous(), Some(&1));
        assert_eq!(cursor.previous(), None);
        assert!(!cursor.has_previous());
    }

    #[rstest]
    fn test_remove_after_previous_keeps_position() {
        let mut list = list_of(&[1, 2, 3]);
        {
            let mut cursor = list.cursor_at(2).unwrap();
            assert_eq!(cursor.previous(), Some(&2));
            assert_eq!(cursor.remove(), Ok(2));
            assert_eq!(cursor.next_index(), 1);
            assert_eq!(cursor.next(), Some(&3));
        }
        assert_eq!(list.as_slice(), &[1, 3]);
    }

    #[rstest]
    fn test_set_without_yield_fails() {
        let mut list = list_of(&[1, 2]);
        let mut cursor = list.cursor();
        assert_eq!(
            cursor.set(9),
            Err(ListError::IllegalState { operation: "set" })
        );
    }

    #[rstest]
    fn test_set_keeps_marker() {
        let mut list = list_of(&[1, 2]);
        let mut cursor = list.cursor();
        cursor.next();
        assert_eq!(cursor.set(10), Ok(1));
        assert_eq!(cursor.set(11), Ok(10));
        assert_eq!(cursor.remove(), Ok(11));
    }

    #[rstest]
    fn test_add_clears_marker() {
        let mut list = list_of(&[1, 3]);
        {
            let mut cursor = list.cursor();
            cursor.next();
            cursor.add(2).unwrap();
            assert!(cursor.remove().is_err());
            assert_eq!(cursor.next(), Some(&3));
        }
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(2, 2, 2)]
    #[case(10, 4, 4)]
    fn test_skip_clamps(#[case] count: usize, #[case] steps: usize, #[case] position: usize) {
        let mut list = list_of(&[1, 2, 3, 4]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.skip(count), steps);
        assert_eq!(cursor.next_index(), position);
    }

    #[rstest]
    fn test_back_clamps_and_marks() {
        let mut list = list_of(&[1, 2, 3, 4]);
        let mut cursor = list.cursor_at(3).unwrap();
        assert_eq!(cursor.back(usize::MAX), 3);
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.remove(), Ok(1));
    }

    #[rstest]
    fn test_immutable_cursor_rejects_mutation() {
        let mut list = ImmutableList::from_vec(vec![1, 2, 3]);
        {
            let mut cursor = list.cursor();
            assert_eq!(cursor.next(), Some(&1));
            assert!(matches!(cursor.remove(), Err(ListError::Unsupported { .. })));
            assert!(matches!(cursor.set(5), Err(ListError::Unsupported { .. })));
            assert!(matches!(cursor.add(5), Err(ListError::Unsupported { .. })));
            assert_eq!(cursor.next_index(), 1);
        }
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }
}
