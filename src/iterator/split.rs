//! Split iterators for divide-and-conquer traversal.
//!
//! A split iterator is an ordinary [`Iterator`] that can additionally give
//! away a prefix of the elements it has not yet yielded. Repeatedly splitting
//! and draining every piece visits each element exactly once, in order when
//! the pieces are concatenated prefix-first.
//!
//! # Splitting strategies
//!
//! | Backing | Split iterator | `try_split` |
//! |---------|----------------|-------------|
//! | contiguous | [`ArraySplitIter`] | first half of the remaining slice, no copy |
//! | linked | `LinkedSplitIter` | collects a growing batch into a [`BatchSplitIter`] |
//! | batch | [`BatchSplitIter`] | first half of its buffer |

use std::iter::FusedIterator;
use std::ops::BitOr;

/// Fewer remaining elements than this cannot be split.
pub const MIN_SPLIT_SIZE: usize = 2;

/// Properties a split iterator guarantees about its traversal.
///
/// # Examples
///
/// ```rust
/// use seqlist::iterator::Characteristics;
///
/// let flags = Characteristics::ORDERED | Characteristics::SIZED;
/// assert!(flags.contains(Characteristics::ORDERED));
/// assert!(!flags.contains(Characteristics::SUBSIZED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Characteristics(u8);

impl Characteristics {
    /// Elements are yielded in list order.
    pub const ORDERED: Self = Self(1);
    /// [`SplitIterator::estimate_size`] is exact.
    pub const SIZED: Self = Self(1 << 1);
    /// Every split produced is itself `SIZED`.
    pub const SUBSIZED: Self = Self(1 << 2);
    /// What every list split iterator in this crate reports.
    pub const LIST: Self = Self::ORDERED.union(Self::SIZED).union(Self::SUBSIZED);

    /// No characteristics.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Combines two sets of characteristics.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every flag of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw flag bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.union(other)
    }
}

/// Batch sizing for splitting linked backings.
///
/// The first split of a linked list copies up to `initial_batch` element
/// references; each following split doubles the batch, never exceeding
/// `max_batch`.
///
/// # Examples
///
/// ```rust
/// use seqlist::iterator::SplitPolicy;
///
/// let policy = SplitPolicy::new(4, 16);
/// assert_eq!(policy.initial_batch(), 4);
/// assert_eq!(policy.max_batch(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitPolicy {
    initial_batch: usize,
    max_batch: usize,
}

impl SplitPolicy {
    /// Batch size of the first split: 1024 elements.
    pub const DEFAULT_INITIAL_BATCH: usize = 1 << 10;
    /// Batch size ceiling: 2^25 elements.
    pub const DEFAULT_MAX_BATCH: usize = 1 << 25;

    /// Creates a policy. `initial_batch` is raised to at least 1 and
    /// `max_batch` to at least `initial_batch`.
    #[must_use]
    pub const fn new(initial_batch: usize, max_batch: usize) -> Self {
        let initial_batch = if initial_batch == 0 { 1 } else { initial_batch };
        let max_batch = if max_batch < initial_batch {
            initial_batch
        } else {
            max_batch
        };
        Self {
            initial_batch,
            max_batch,
        }
    }

    /// Batch size of the first split.
    #[must_use]
    pub const fn initial_batch(&self) -> usize {
        self.initial_batch
    }

    /// Largest batch a split may produce.
    #[must_use]
    pub const fn max_batch(&self) -> usize {
        self.max_batch
    }

    /// The batch size to use after a split of `current` elements.
    #[must_use]
    pub const fn next_batch(&self, current: usize) -> usize {
        let doubled = current.saturating_mul(2);
        if doubled > self.max_batch {
            self.max_batch
        } else {
            doubled
        }
    }
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_BATCH, Self::DEFAULT_MAX_BATCH)
    }
}

/// An iterator that can partition its remaining elements.
///
/// # Laws
///
/// For any split iterator `s`, draining `s.try_split()` (when `Some`) and
/// then `s` yields exactly the elements draining `s` alone would have
/// yielded, in the same order.
///
/// # Examples
///
/// ```rust
/// use seqlist::prelude::*;
///
/// let list: ArrayList<i32> = (0..8).collect();
/// let mut rest = list.split_iter();
/// let prefix = rest.try_split().unwrap();
///
/// let mut collected: Vec<i32> = prefix.copied().collect();
/// rest.for_each_remaining(|element| collected.push(*element));
/// assert_eq!(collected, (0..8).collect::<Vec<_>>());
/// ```
pub trait SplitIterator: Iterator + Sized {
    /// The type of the detached prefix.
    type Split: SplitIterator<Item = Self::Item>;

    /// Detaches a prefix of the remaining elements.
    ///
    /// Returns `None` when fewer than [`MIN_SPLIT_SIZE`] elements remain.
    fn try_split(&mut self) -> Option<Self::Split>;

    /// The number of elements not yet yielded. Exact when the iterator is
    /// [`Characteristics::SIZED`].
    fn estimate_size(&self) -> usize;

    /// The guarantees of this iterator.
    fn characteristics(&self) -> Characteristics {
        Characteristics::LIST
    }

    /// The remaining size, if it is known exactly.
    fn exact_size_if_known(&self) -> Option<usize> {
        self.characteristics()
            .contains(Characteristics::SIZED)
            .then(|| self.estimate_size())
    }

    /// Applies `action` to the next element, returning `false` when the
    /// iterator is exhausted.
    fn try_advance<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(Self::Item),
    {
        self.next().map(action).is_some()
    }

    /// Applies `action` to every remaining element.
    fn for_each_remaining<F>(&mut self, mut action: F)
    where
        F: FnMut(Self::Item),
    {
        for element in self.by_ref() {
            action(element);
        }
    }
}

/// Split iterator over a contiguous slice.
///
/// Splitting is free: the prefix is a sub-slice of the same storage.
#[derive(Debug, Clone)]
pub struct ArraySplitIter<'a, T> {
    elements: &'a [T],
}

impl<'a, T> ArraySplitIter<'a, T> {
    /// Creates a split iterator over `elements`.
    #[must_use]
    pub const fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// The elements not yet yielded.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

impl<'a, T> Iterator for ArraySplitIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.elements.split_first()?;
        self.elements = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.elements.len(), Some(self.elements.len()))
    }
}

impl<T> DoubleEndedIterator for ArraySplitIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.elements.split_last()?;
        self.elements = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for ArraySplitIter<'_, T> {}

impl<T> FusedIterator for ArraySplitIter<'_, T> {}

impl<T> SplitIterator for ArraySplitIter<'_, T> {
    type Split = Self;

    fn try_split(&mut self) -> Option<Self> {
        if self.elements.len() < MIN_SPLIT_SIZE {
            return None;
        }
        let (prefix, rest) = self.elements.split_at(self.elements.len() / 2);
        self.elements = rest;
        Some(Self::new(prefix))
    }

    fn estimate_size(&self) -> usize {
        self.elements.len()
    }
}

/// Split iterator over an already materialized batch of element references.
///
/// Produced by splitting a linked backing; splits its own buffer in half.
#[derive(Debug, Clone)]
pub struct BatchSplitIter<'a, T> {
    elements: std::vec::IntoIter<&'a T>,
}

impl<'a, T> BatchSplitIter<'a, T> {
    /// Creates a split iterator yielding `elements` in order.
    #[must_use]
    pub fn new(elements: Vec<&'a T>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<'a, T> Iterator for BatchSplitIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for BatchSplitIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for BatchSplitIter<'_, T> {}

impl<T> FusedIterator for BatchSplitIter<'_, T> {}

impl<T> SplitIterator for BatchSplitIter<'_, T> {
    type Split = Self;

    fn try_split(&mut self) -> Option<Self> {
        let remaining = self.elements.len();
        if remaining < MIN_SPLIT_SIZE {
            return None;
        }
        let prefix: Vec<_> = self.elements.by_ref().take(remaining / 2).collect();
        Some(Self::new(prefix))
    }

    fn estimate_size(&self) -> usize {
        self.elements.len()
    }
}
