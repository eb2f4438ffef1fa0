//! Rayon integration for split iterators.
//!
//! [`ParallelSplit`] turns any [`SplitIterator`] into a rayon
//! [`ParallelIterator`]. Rayon decides when to split; each split is a
//! [`SplitIterator::try_split`] call, so the backing's own splitting strategy
//! (halving for contiguous storage, growing batches for linked storage) drives
//! the work distribution.
//!
//! # Examples
//!
//! ```rust
//! use rayon::iter::ParallelIterator;
//! use seqlist::prelude::*;
//!
//! let list: LinkedList<u64> = (1..=100).collect();
//! let sum: u64 = par_split(&list).copied().sum();
//! assert_eq!(sum, 5050);
//! ```

use rayon::iter::ParallelIterator;
use rayon::iter::plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed};

use super::split::SplitIterator;
use crate::sequence::List;

/// A rayon parallel iterator driven by a [`SplitIterator`].
#[derive(Debug, Clone)]
pub struct ParallelSplit<S> {
    split: S,
}

impl<S: SplitIterator> ParallelSplit<S> {
    /// Wraps a split iterator.
    #[must_use]
    pub const fn new(split: S) -> Self {
        Self { split }
    }
}

/// Creates a parallel iterator over the elements of `list`.
#[must_use]
pub fn par_split<L: List>(list: &L) -> ParallelSplit<L::SplitIter<'_>> {
    ParallelSplit::new(list.split_iter())
}

/// Either the original split iterator or a prefix detached from it.
enum SplitProducer<S: SplitIterator> {
    Origin(S),
    Detached(S::Split),
}

impl<S> UnindexedProducer for SplitProducer<S>
where
    S: SplitIterator + Send,
    S::Item: Send,
    S::Split: SplitIterator<Item = S::Item, Split = S::Split> + Send,
{
    type Item = S::Item;

    fn split(self) -> (Self, Option<Self>) {
        match self {
            Self::Origin(mut split) => match split.try_split() {
                Some(prefix) => (Self::Detached(prefix), Some(Self::Origin(split))),
                None => (Self::Origin(split), None),
            },
            Self::Detached(mut split) => match split.try_split() {
                Some(prefix) => (Self::Detached(prefix), Some(Self::Detached(split))),
                None => (Self::Detached(split), None),
            },
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        match self {
            Self::Origin(split) => folder.consume_iter(split),
            Self::Detached(split) => folder.consume_iter(split),
        }
    }
}

impl<S> ParallelIterator for ParallelSplit<S>
where
    S: SplitIterator + Send,
    S::Item: Send,
    S::Split: SplitIterator<Item = S::Item, Split = S::Split> + Send,
{
    type Item = S::Item;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(SplitProducer::<S>::Origin(self.split), consumer)
    }
}
