//! Node-tracking cursor for [`LinkedList`].

use super::LinkedList;
use super::arena::NodeHandle;
use crate::error::ListError;
use crate::iterator::{BidirectionalIterator, LastYielded};

/// A cursor over a [`LinkedList`] that holds on to the node after it.
///
/// Unlike an index-based cursor, every step, removal and insertion is O(1):
/// the cursor never searches for its position again after construction.
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// let mut list: LinkedList<i32> = (1..=5).collect();
/// {
///     let mut cursor = list.cursor_at(2).unwrap();
///     assert_eq!(cursor.next(), Some(&3));
///     cursor.set(30).unwrap();
///     cursor.add(35).unwrap();
///     assert_eq!(cursor.previous(), Some(&35));
///     assert_eq!(cursor.remove(), Ok(35));
/// }
///
/// assert_eq!(list, ArrayList::from_slice(&[1, 2, 30, 4, 5]));
/// ```
pub struct LinkedCursor<'a, T> {
    list: &'a mut LinkedList<T>,
    next: Option<NodeHandle>,
    position: usize,
    last: LastYielded<NodeHandle>,
}

impl<'a, T> LinkedCursor<'a, T> {
    /// The caller guarantees `position <= list.len()`.
    pub(super) fn new(list: &'a mut LinkedList<T>, position: usize) -> Self {
        let next = list.node_at(position);
        Self {
            list,
            next,
            position,
            last: LastYielded::Cleared,
        }
    }

    fn step_forward(&mut self) -> Option<NodeHandle> {
        let handle = self.next?;
        self.next = self.list.arena[handle].next;
        self.position += 1;
        self.last = LastYielded::At(handle);
        Some(handle)
    }

    fn step_backward(&mut self) -> Option<NodeHandle> {
        if self.position == 0 {
            return None;
        }
        let handle = match self.next {
            Some(next) => self.list.arena[next].previous,
            None => self.list.tail,
        }?;
        self.next = Some(handle);
        self.position -= 1;
        self.last = LastYielded::At(handle);
        Some(handle)
    }
}

impl<T> BidirectionalIterator for LinkedCursor<'_, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.position < self.list.length
    }

    fn has_previous(&self) -> bool {
        self.position > 0
    }

    fn next(&mut self) -> Option<&T> {
        let handle = self.step_forward()?;
        Some(&self.list.arena[handle].element)
    }

    fn previous(&mut self) -> Option<&T> {
        let handle = self.step_backward()?;
        Some(&self.list.arena[handle].element)
    }

    fn next_index(&self) -> usize {
        self.position
    }

    fn remove(&mut self) -> Result<T, ListError> {
        let LastYielded::At(handle) = self.last else {
            return Err(ListError::IllegalState {
                operation: "remove",
            });
        };
        let successor = self.list.arena[handle].next;
        let element = self.list.unlink(handle);
        if self.next == Some(handle) {
            self.next = successor;
        } else {
            self.position -= 1;
        }
        self.last = LastYielded::Cleared;
        Ok(element)
    }

    fn set(&mut self, element: T) -> Result<T, ListError> {
        match self.last {
            LastYielded::At(handle) => Ok(std::mem::replace(
                &mut self.list.arena[handle].element,
                element,
            )),
            LastYielded::Cleared => Err(ListError::IllegalState { operation: "set" }),
        }
    }

    fn add(&mut self, element: T) -> Result<(), ListError> {
        match self.next {
            Some(successor) => self.list.link_before(element, successor),
            None => self.list.link_last(element),
        };
        self.position += 1;
        self.last = LastYielded::Cleared;
        Ok(())
    }

    fn skip(&mut self, count: usize) -> usize {
        let mut steps = 0;
        while steps < count && self.step_forward().is_some() {
            steps += 1;
        }
        steps
    }

    fn back(&mut self, count: usize) -> usize {
        let mut steps = 0;
        while steps < count && self.step_backward().is_some() {
            steps += 1;
        }
        steps
    }
}
