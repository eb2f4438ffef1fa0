//! Split iterator for [`LinkedList`](super::LinkedList).

use std::iter::FusedIterator;

use log::trace;

use super::arena::{NodeArena, NodeHandle};
use crate::iterator::{BatchSplitIter, MIN_SPLIT_SIZE, SplitIterator, SplitPolicy};

/// Split iterator over a linked list.
///
/// A linked list cannot be cut in the middle without walking to it, so
/// splitting instead copies references to the next batch of elements into a
/// [`BatchSplitIter`]. Batches start at [`SplitPolicy::initial_batch`] and
/// double on each split up to [`SplitPolicy::max_batch`].
///
/// # Examples
///
/// ```rust
/// use seqlist::iterator::SplitPolicy;
/// use seqlist::prelude::*;
///
/// let list: LinkedList<i32> = (0..10).collect();
/// let mut rest = list.split_iter_with(SplitPolicy::new(4, 64));
///
/// let first = rest.try_split().unwrap();
/// assert_eq!(first.estimate_size(), 4);
/// let second = rest.try_split().unwrap();
/// assert_eq!(second.estimate_size(), 6);
/// assert!(rest.try_split().is_none());
/// ```
pub struct LinkedSplitIter<'a, T> {
    arena: &'a NodeArena<T>,
    next: Option<NodeHandle>,
    remaining: usize,
    batch: usize,
    policy: SplitPolicy,
}

impl<'a, T> LinkedSplitIter<'a, T> {
    pub(super) const fn new(
        arena: &'a NodeArena<T>,
        next: Option<NodeHandle>,
        remaining: usize,
        policy: SplitPolicy,
    ) -> Self {
        Self {
            arena,
            next,
            remaining,
            batch: policy.initial_batch(),
            policy,
        }
    }
}

impl<'a, T> Iterator for LinkedSplitIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedSplitIter<'_, T> {}

impl<T> FusedIterator for LinkedSplitIter<'_, T> {}

impl<'a, T> SplitIterator for LinkedSplitIter<'a, T> {
    type Split = BatchSplitIter<'a, T>;

    fn try_split(&mut self) -> Option<BatchSplitIter<'a, T>> {
        if self.remaining < MIN_SPLIT_SIZE {
            return None;
        }
        let size = self.batch.min(self.remaining);
        trace!(
            "LinkedSplitIter detaching batch of {size} with {} remaining",
            self.remaining
        );
        let batch: Vec<&'a T> = self.by_ref().take(size).collect();
        self.batch = self.policy.next_batch(self.batch);
        Some(BatchSplitIter::new(batch))
    }

    fn estimate_size(&self) -> usize {
        self.remaining
    }
}
