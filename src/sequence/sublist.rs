//! Write-through windows over a list.
//!
//! A [`Sublist`] covers `from..to` of a parent list without copying it.
//! Index `i` of the view is index `offset + i` of the parent, and every
//! operation is forwarded there after being checked against the view's own
//! bounds.
//!
//! # Nesting
//!
//! A view of a view borrows the root list directly with the combined offset,
//! together with mutable references to the length of every view it is
//! nested in. A structural change through the innermost view updates all of
//! those lengths in one step, so no level of nesting ever re-translates an
//! index.
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list: LinkedList<i32> = (0..8).collect();
//! let mut outer = list.subview(1, 7).unwrap();
//! let mut inner = outer.subview(2, 4).unwrap();
//! assert_eq!(inner.parent_offset(), 3);
//!
//! inner.clear().unwrap();
//! drop(inner);
//! assert_eq!(outer.len(), 4);
//! drop(outer);
//! assert_eq!(list, ArrayList::from_slice(&[0, 1, 2, 5, 6, 7]));
//! ```

use std::fmt;

use smallvec::SmallVec;

use super::contract::List;
use crate::error::{ListError, check_index, check_position, check_range};
use crate::iterator::ListCursor;

/// A window over `from..to` of a parent list.
///
/// The view mutably borrows the root list for its whole lifetime, so the
/// parent cannot change underneath it. Drop the view before using the
/// parent again: the view has a destructor, so its borrow lasts until the
/// end of its scope.
pub struct Sublist<'a, L: List> {
    parent: &'a mut L,
    offset: usize,
    length: usize,
    enclosing: SmallVec<[&'a mut usize; 4]>,
}

impl<'a, L: List> Sublist<'a, L> {
    /// The caller guarantees `from <= to <= parent.len()`.
    pub(crate) fn new(parent: &'a mut L, from: usize, to: usize) -> Self {
        Self {
            parent,
            offset: from,
            length: to - from,
            enclosing: SmallVec::new(),
        }
    }

    /// The index in the root list of this view's first element.
    #[must_use]
    pub const fn parent_offset(&self) -> usize {
        self.offset
    }

    fn grow(&mut self, count: usize) {
        self.length += count;
        for length in &mut self.enclosing {
            **length += count;
        }
    }

    fn shrink(&mut self, count: usize) {
        self.length -= count;
        for length in &mut self.enclosing {
            **length -= count;
        }
    }
}

impl<'a, L: List> List for Sublist<'a, L> {
    type Element = L::Element;
    type Cursor<'c>
        = ListCursor<'c, Self>
    where
        Self: 'c;
    type SplitIter<'s>
        = L::SplitIter<'s>
    where
        Self: 's;
    type View<'v>
        = Sublist<'v, L>
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.length
    }

    fn get(&self, index: usize) -> Result<&L::Element, ListError> {
        check_index(index, self.length)?;
        self.parent.get(self.offset + index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut L::Element, ListError> {
        check_index(index, self.length)?;
        self.parent.get_mut(self.offset + index)
    }

    fn set(&mut self, index: usize, element: L::Element) -> Result<L::Element, ListError> {
        check_index(index, self.length)?;
        self.parent.set(self.offset + index, element)
    }

    fn insert(&mut self, index: usize, element: L::Element) -> Result<(), ListError> {
        check_position(index, self.length)?;
        self.parent.insert(self.offset + index, element)?;
        self.grow(1);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<L::Element, ListError> {
        check_index(index, self.length)?;
        let removed = self.parent.remove_at(self.offset + index)?;
        self.shrink(1);
        Ok(removed)
    }

    /// Moves the view's own last element into `index`; elements of the
    /// parent outside the view stay where they are.
    fn swap_remove(&mut self, index: usize) -> Result<L::Element, ListError> {
        check_index(index, self.length)?;
        let last = self.length - 1;
        let tail = self.remove_at(last)?;
        if index == last {
            return Ok(tail);
        }
        self.set(index, tail)
    }

    fn get_elements(&self, from: usize, buffer: &mut [L::Element]) -> Result<(), ListError>
    where
        L::Element: Clone,
    {
        check_range(from, from.saturating_add(buffer.len()), self.length)?;
        self.parent.get_elements(self.offset + from, buffer)
    }

    fn add_elements(&mut self, index: usize, elements: &[L::Element]) -> Result<(), ListError>
    where
        L::Element: Clone,
    {
        check_position(index, self.length)?;
        self.parent.add_elements(self.offset + index, elements)?;
        self.grow(elements.len());
        Ok(())
    }

    fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        check_range(from, to, self.length)?;
        self.parent
            .remove_range(self.offset + from, self.offset + to)?;
        self.shrink(to - from);
        Ok(())
    }

    fn extract_elements(&mut self, from: usize, to: usize) -> Result<Vec<L::Element>, ListError> {
        check_range(from, to, self.length)?;
        let extracted = self
            .parent
            .extract_elements(self.offset + from, self.offset + to)?;
        self.shrink(to - from);
        Ok(extracted)
    }

    fn resize(&mut self, new_len: usize, fill: L::Element) -> Result<(), ListError>
    where
        L::Element: Clone,
    {
        if new_len < self.length {
            self.remove_range(new_len, self.length)
        } else {
            let fill = vec![fill; new_len - self.length];
            self.add_elements(self.length, &fill)
        }
    }

    fn clear(&mut self) -> Result<(), ListError> {
        self.remove_range(0, self.length)
    }

    fn cursor_at(&mut self, index: usize) -> Result<ListCursor<'_, Self>, ListError> {
        check_position(index, self.length)?;
        Ok(ListCursor::new(self, index))
    }

    fn split_iter(&self) -> L::SplitIter<'_> {
        self.parent
            .split_range(self.offset, self.offset + self.length)
            .unwrap_or_else(|_| unreachable!("view reaches past the end of its parent"))
    }

    fn split_range(&self, from: usize, to: usize) -> Result<L::SplitIter<'_>, ListError> {
        check_range(from, to, self.length)?;
        self.parent
            .split_range(self.offset + from, self.offset + to)
    }

    fn subview(&mut self, from: usize, to: usize) -> Result<Sublist<'_, L>, ListError> {
        check_range(from, to, self.length)?;
        let Self {
            parent,
            offset,
            length,
            enclosing,
        } = self;
        let mut lengths: SmallVec<[&mut usize; 4]> = enclosing
            .iter_mut()
            .map(|outer| &mut **outer)
            .collect();
        lengths.push(length);
        Ok(Sublist {
            parent: &mut **parent,
            offset: *offset + from,
            length: to - from,
            enclosing: lengths,
        })
    }
}

impl<L> fmt::Debug for Sublist<'_, L>
where
    L: List,
    L::Element: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.split_iter()).finish()
    }
}
