//! Error type for positional operations.
//!
//! Every positional operation on a [`Sequence`](crate::Sequence) validates its
//! arguments against the current length before touching the storage. When the
//! check fails the call returns [`OutOfRange`] and the sequence is left exactly
//! as it was.
//!
//! Lookup-style operations (`get`, `find`, `find_key`) never produce this error;
//! they report absence through `Option`.

/// Raised when an index or range argument falls outside the bounds implied by
/// the current length.
///
/// # Examples
///
/// ```rust
/// use convenient_structures::{OutOfRange, Sequence};
///
/// let sequence = Sequence::from_vec(vec![1, 2, 3]);
/// assert_eq!(
///     sequence.at(3),
///     Err(OutOfRange::Index { index: 3, length: 3 })
/// );
/// assert_eq!(
///     format!("{}", OutOfRange::Index { index: 3, length: 3 }),
///     "index 3 is out of range for length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRange {
    /// A single index (after negative resolution) is not addressable.
    #[error("index {index} is out of range for length {length}")]
    Index {
        /// The index as supplied by the caller.
        index: isize,
        /// The length at the time of the call.
        length: usize,
    },
    /// A half-open range `[start, end)` is reversed or exceeds the length.
    #[error("range {start}..{end} is out of range for length {length}")]
    Range {
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        end: usize,
        /// The length at the time of the call.
        length: usize,
    },
    /// The insertion anchor does not name an existing element.
    #[error("cannot insert after position {after} in a sequence of length {length}")]
    InsertPosition {
        /// The position after which the caller asked to insert.
        after: usize,
        /// The length at the time of the call.
        length: usize,
    },
    /// An element was requested from an empty sequence.
    #[error("cannot remove an element from an empty sequence")]
    Empty,
}

/// Result alias for operations that can fail with [`OutOfRange`].
pub type RangeResult<T> = Result<T, OutOfRange>;
