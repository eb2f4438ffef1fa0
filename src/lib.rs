//! # seqlist
//!
//! Growable list containers sharing one contract, with interchangeable
//! backings, cursors, zero-copy sublist views and split iterators.
//!
//! ## Overview
//!
//! - **Contract**: [`List`](sequence::List), plus the [`Stack`](sequence::Stack)
//!   and [`Deque`](sequence::Deque) capabilities
//! - **Backings**: [`ArrayList`](sequence::ArrayList) (contiguous),
//!   [`LinkedList`](sequence::LinkedList) (doubly linked, arena allocated) and
//!   [`ImmutableList`](sequence::ImmutableList) (fixed, read only)
//! - **Views**: [`Sublist`](sequence::Sublist), an index-translated window that
//!   forwards mutations to its parent
//! - **Iteration**: [`BidirectionalIterator`](iterator::BidirectionalIterator)
//!   cursors and [`SplitIterator`](iterator::SplitIterator) for divide and
//!   conquer traversal
//!
//! ## Feature Flags
//!
//! - `rayon`: bridge split iterators into rayon parallel iterators
//! - `serde`: serialize and deserialize the owning containers as sequences
//!
//! ## Example
//!
//! ```rust
//! use seqlist::prelude::*;
//!
//! let mut list: LinkedList<i32> = LinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! let mut view = list.subview(1, 3).unwrap();
//! view.insert(1, 5).unwrap();
//! assert_eq!(view.len(), 3);
//! drop(view);
//!
//! let collected: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(collected, vec![0, 1, 5, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the contract traits and the iterator traits.
///
/// # Usage
///
/// ```rust
/// use seqlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ListError;
    pub use crate::iterator::*;
    pub use crate::sequence::*;
}

mod error;
pub mod iterator;
pub mod sequence;

pub use error::ListError;
