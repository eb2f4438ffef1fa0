//! List containers.
//!
//! This module provides the [`List`] contract and its backings:
//!
//! - [`ArrayList`]: contiguous growable storage, O(1) indexed access
//! - [`LinkedList`]: doubly linked nodes, O(1) at both ends
//! - [`ImmutableList`]: fixed contents, every mutation fails
//! - [`Sublist`]: a window over any of the above that writes through
//!
//! # Choosing a backing
//!
//! | Operation | `ArrayList` | `LinkedList` | `ImmutableList` |
//! |-----------|-------------|--------------|-----------------|
//! | `get` / `set` | O(1) | O(n) | O(1) / fails |
//! | `add` | O(1) amortized | O(1) | fails |
//! | `insert` / `remove_at` | O(n) | O(n) to locate, O(1) to splice | fails |
//! | `swap_remove` | O(1) | O(n) to locate, O(1) to relocate | fails |
//! | ends (`Deque`) | - | O(1) | - |
//! | cursor step | O(1) | O(1) | O(1) |
//!
//! # Examples
//!
//! ## `ArrayList`
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list: ArrayList<i32> = (1..=5).collect();
//! list.insert(0, 0).unwrap();
//! assert_eq!(list.get(0), Ok(&0));
//!
//! // Order-breaking O(1) removal
//! assert_eq!(list.swap_remove(1), Ok(1));
//! assert_eq!(list.as_slice(), &[0, 5, 2, 3, 4]);
//! ```
//!
//! ## `LinkedList`
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//! assert_eq!(list.swap_remove(0), Ok(0));
//! assert_eq!(list.pop_front(), Some(2));
//! ```
//!
//! ## `Sublist`
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list: ArrayList<i32> = (0..10).collect();
//! let mut view = list.subview(2, 6).unwrap();
//! assert_eq!(view.get(0), Ok(&2));
//!
//! let mut inner = view.subview(1, 3).unwrap();
//! inner.add(99).unwrap();
//! drop(inner);
//!
//! assert_eq!(view.len(), 5);
//! drop(view);
//! assert_eq!(list.get(5), Ok(&99));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

mod array_list;
mod contract;
mod immutable_list;
mod linked;
#[cfg(feature = "serde")]
mod serialization;
mod sublist;

pub use array_list::ArrayList;
pub use contract::Deque;
pub use contract::List;
pub use contract::Stack;
pub use immutable_list::ImmutableList;
pub use linked::LinkedCursor;
pub use linked::LinkedList;
pub use linked::LinkedListIntoIterator;
pub use linked::LinkedListIterator;
pub use linked::LinkedSplitIter;
pub use sublist::Sublist;

/// Combines element hashes in order: `h = 31 * h + hash(element)` from 1.
pub(crate) fn ordered_hash_code<'a, T, I>(elements: I) -> u64
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements.into_iter().fold(1, |code: u64, element| {
        let mut hasher = FxHasher::default();
        element.hash(&mut hasher);
        code.wrapping_mul(31).wrapping_add(hasher.finish())
    })
}

/// Feeds a sequence to a hasher the way `[T]` does: length, then elements.
///
/// Every backing hashes through this, so equal lists hash equally across
/// backings.
pub(crate) fn hash_sequence<'a, T, I, H>(length: usize, elements: I, state: &mut H)
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
    H: Hasher,
{
    length.hash(state);
    for element in elements {
        element.hash(state);
    }
}

/// Writes `[a, b, c]`.
pub(crate) fn display_sequence<'a, T, I>(
    formatter: &mut fmt::Formatter<'_>,
    elements: I,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "[")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

/// Element-wise equality between every pair of owning backings.
macro_rules! impl_list_equality {
    ($($left:ident => $($right:ident),+);+ $(;)?) => {
        $($(
            impl<T, U> PartialEq<$right<U>> for $left<T>
            where
                T: PartialEq<U>,
            {
                fn eq(&self, other: &$right<U>) -> bool {
                    List::content_eq(self, other)
                }
            }
        )+)+
    };
}

impl_list_equality! {
    ArrayList => ArrayList, LinkedList, ImmutableList;
    LinkedList => ArrayList, LinkedList, ImmutableList;
    ImmutableList => ArrayList, LinkedList, ImmutableList;
}

impl<T: Eq> Eq for ArrayList<T> {}
impl<T: Eq> Eq for LinkedList<T> {}
impl<T: Eq> Eq for ImmutableList<T> {}

static_assertions::assert_impl_all!(ArrayList<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(LinkedList<String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(ImmutableList<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(ArrayList<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(LinkedList<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Sublist<'static, ArrayList<i32>>: Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::BidirectionalIterator;
    use rstest::rstest;

    #[rstest]
    fn test_ordered_hash_code_empty_is_one() {
        let empty: [i32; 0] = [];
        assert_eq!(ordered_hash_code(&empty), 1);
    }

    #[rstest]
    fn test_ordered_hash_code_is_order_sensitive() {
        assert_ne!(ordered_hash_code(&[1, 2]), ordered_hash_code(&[2, 1]));
        assert_eq!(ordered_hash_code(&[1, 2]), ordered_hash_code(&[1, 2]));
    }

    #[rstest]
    fn test_cross_backing_equality() {
        let array: ArrayList<i32> = (1..=3).collect();
        let linked: LinkedList<i32> = (1..=3).collect();
        let immutable: ImmutableList<i32> = (1..=3).collect();
        assert_eq!(array, linked);
        assert_eq!(linked, immutable);
        assert_eq!(immutable, array);

        let shorter: LinkedList<i32> = (1..=2).collect();
        assert_ne!(array, shorter);
    }

    #[rstest]
    fn test_cross_backing_hash_agrees() {
        use std::hash::DefaultHasher;

        fn hash_of<V: Hash>(value: &V) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let array: ArrayList<i32> = (1..=3).collect();
        let linked: LinkedList<i32> = (1..=3).collect();
        assert_eq!(hash_of(&array), hash_of(&linked));
        assert_eq!(array.hash_code(), linked.hash_code());
    }

    #[rstest]
    fn test_display_matches_across_backings() {
        let array: ArrayList<i32> = (1..=3).collect();
        let linked: LinkedList<i32> = (1..=3).collect();
        assert_eq!(format!("{array}"), "[1, 2, 3]");
        assert_eq!(format!("{linked}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_cursor_starts_before_first_element() {
        let mut array: ArrayList<i32> = (1..=3).collect();
        let mut linked: LinkedList<i32> = (1..=3).collect();
        let mut immutable: ImmutableList<i32> = (1..=3).collect();
        let mut empty: LinkedList<i32> = LinkedList::new();

        assert_eq!(array.cursor().next_index(), 0);
        assert_eq!(array.cursor().next().copied(), Some(1));
        assert_eq!(linked.cursor().next().copied(), Some(1));
        assert_eq!(immutable.cursor().previous_index(), None);
        assert_eq!(empty.cursor().next().copied(), None);

        let mut view = array.subview(1, 3).unwrap();
        assert_eq!(view.cursor().next().copied(), Some(2));
    }
}
