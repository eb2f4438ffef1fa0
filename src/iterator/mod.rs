//! Cursors and split iterators shared by every list backing.
//!
//! - [`BidirectionalIterator`]: a mutation-capable cursor that walks in both
//!   directions and can `remove`, `set` or `add` at its position
//! - [`SplitIterator`]: an ordered, exactly sized traversal that can hand off
//!   a prefix of its remaining elements for independent consumption
//!
//! With the `rayon` feature, [`ParallelSplit`] drives any split iterator
//! through rayon's work-stealing pool.

mod bidirectional;
#[cfg(feature = "rayon")]
mod parallel;
mod split;

pub use bidirectional::BidirectionalIterator;
pub use bidirectional::ListCursor;
pub(crate) use bidirectional::LastYielded;
#[cfg(feature = "rayon")]
pub use parallel::ParallelSplit;
#[cfg(feature = "rayon")]
pub use parallel::par_split;
pub use split::ArraySplitIter;
pub use split::BatchSplitIter;
pub use split::Characteristics;
pub use split::MIN_SPLIT_SIZE;
pub use split::SplitIterator;
pub use split::SplitPolicy;
