//! Error types for list containers.
//!
//! Every fallible operation in this crate reports a [`ListError`]. Failures
//! are always detected before any element is touched, so a container that
//! returned an error is left exactly as it was.

use std::fmt;

/// Represents the failures a list operation can report.
///
/// # Examples
///
/// ```rust
/// use seqlist::ListError;
///
/// let error = ListError::IndexOutOfBounds { index: 5, length: 3 };
/// assert_eq!(format!("{error}"), "index 5 out of bounds for length 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// An index was outside the valid range of the container.
    ///
    /// For element access the valid range is `[0, length)`, for insertion
    /// positions it is `[0, length]`.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The length of the container at the time of the call.
        length: usize,
    },
    /// A `from..to` range was reversed or reached past the end.
    InvalidRange {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
        /// The length of the container at the time of the call.
        length: usize,
    },
    /// The container does not allow this mutation.
    Unsupported {
        /// The name of the rejected operation.
        operation: &'static str,
    },
    /// A cursor was asked to `remove` or `set` without a preceding
    /// `next`/`previous`.
    IllegalState {
        /// The name of the rejected operation.
        operation: &'static str,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::InvalidRange { from, to, length } => write!(
                formatter,
                "range {from}..{to} out of bounds for length {length}"
            ),
            Self::Unsupported { operation } => {
                write!(formatter, "{operation}: list does not support mutation")
            }
            Self::IllegalState { operation } => write!(
                formatter,
                "{operation}: no element yielded since the last structural change"
            ),
        }
    }
}

impl std::error::Error for ListError {}

/// Fails unless `index < length`.
pub(crate) const fn check_index(index: usize, length: usize) -> Result<(), ListError> {
    if index < length {
        Ok(())
    } else {
        Err(ListError::IndexOutOfBounds { index, length })
    }
}

/// Fails unless `index <= length`; used for insertion points.
pub(crate) const fn check_position(index: usize, length: usize) -> Result<(), ListError> {
    if index <= length {
        Ok(())
    } else {
        Err(ListError::IndexOutOfBounds { index, length })
    }
}

/// Fails unless `from <= to <= length`.
pub(crate) const fn check_range(from: usize, to: usize, length: usize) -> Result<(), ListError> {
    if from <= to && to <= length {
        Ok(())
    } else {
        Err(ListError::InvalidRange { from, to, length })
    }
}
