//! Resumable external iteration shared by [`Sequence`] and [`OrderedMap`].
//!
//! A [`Cursor`] is a pull-based traversal position over some view of a
//! container. It can be advanced one element at a time, asked whether it is
//! exhausted, and reset to the start. Two cursors are provided:
//!
//! - [`SequenceCursor`]: borrows the live storage of a [`Sequence`]. The
//!   borrow keeps the sequence from being mutated while the cursor is alive.
//! - [`SnapshotCursor`]: owns a copy of the elements taken when it was
//!   created, so later mutation of the source is invisible to it. This is what
//!   [`OrderedMap::cursor`] hands out.
//!
//! # Traversals
//!
//! [`Cursor::traverse`] wraps a cursor in a [`Traversal`], a standard
//! [`Iterator`] with these rules:
//!
//! 1. Each call to `next` pulls one element from the cursor. When the cursor
//!    is already exhausted the traversal resets the cursor and ends.
//! 2. Dropping a traversal early (a `break`, `take`, `find`, ...) leaves the
//!    cursor where it was.
//! 3. A fresh traversal over the same cursor resumes from the cursor position:
//!    mid-stream after an early break, or from the start after a traversal
//!    that ran to completion.
//!
//! A traversal dropped right after yielding the final element has not reset
//! the cursor yet; the next traversal then ends immediately and performs the
//! reset, and the one after that starts over.
//!
//! ```rust
//! use convenient_structures::{Cursor, Sequence};
//!
//! let words = Sequence::from_vec(vec!["foo", "bar", "baz", "qux"]);
//! let mut cursor = words.cursor();
//!
//! let mut accumulated = String::new();
//! for word in cursor.traverse() {
//!     accumulated.push_str(word);
//!     if *word == "bar" {
//!         break;
//!     }
//! }
//! assert_eq!(accumulated, "foobar");
//!
//! for word in cursor.traverse() {
//!     accumulated.push_str(word);
//! }
//! assert_eq!(accumulated, "foobarbazqux");
//!
//! // Completion reset the cursor, so the next traversal starts over.
//! assert_eq!(cursor.traverse().count(), 4);
//! ```
//!
//! [`Sequence`]: crate::Sequence
//! [`OrderedMap`]: crate::OrderedMap
//! [`OrderedMap::cursor`]: crate::OrderedMap::cursor

use std::iter::FusedIterator;

// =============================================================================
// Cursor Protocol
// =============================================================================

/// A resettable, resumable position over a container view.
///
/// Implementors provide [`advance`](Cursor::advance), [`reset`](Cursor::reset),
/// [`position`](Cursor::position) and [`length`](Cursor::length). A cursor is
/// done exactly when `position() >= length()`.
pub trait Cursor {
    /// The element type yielded by the cursor.
    type Item;

    /// Yields the element at the current position and moves past it.
    ///
    /// Returns `None` without moving when the cursor is done.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Moves the cursor back to the first element.
    fn reset(&mut self);

    /// Number of elements yielded since creation or the last reset.
    fn position(&self) -> usize;

    /// Number of elements in the underlying view.
    fn length(&self) -> usize;

    /// Returns `true` when no element is left to yield.
    #[inline]
    fn is_done(&self) -> bool {
        self.position() >= self.length()
    }

    /// Number of elements left before the cursor is done.
    #[inline]
    fn remaining(&self) -> usize {
        self.length().saturating_sub(self.position())
    }

    /// Yields the next element together with whether the cursor is done
    /// after yielding it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_structures::{Cursor, Sequence};
    ///
    /// let sequence = Sequence::from_vec(vec![1, 2]);
    /// let mut cursor = sequence.cursor();
    /// assert_eq!(cursor.step(), Some((&1, false)));
    /// assert_eq!(cursor.step(), Some((&2, true)));
    /// assert_eq!(cursor.step(), None);
    /// ```
    fn step(&mut self) -> Option<(Self::Item, bool)> {
        let item = self.advance()?;
        Some((item, self.is_done()))
    }

    /// Starts a [`Traversal`] from the current position.
    fn traverse(&mut self) -> Traversal<'_, Self>
    where
        Self: Sized,
    {
        Traversal::new(self)
    }
}

/// Containers that can hand out a [`Cursor`].
pub trait Iterable {
    /// The cursor type produced by [`Iterable::cursor`].
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Creates a cursor positioned at the first element.
    fn cursor(&self) -> Self::Cursor<'_>;
}

// =============================================================================
// SequenceCursor
// =============================================================================

/// A cursor over the live storage of a [`Sequence`](crate::Sequence).
#[derive(Debug, Clone)]
pub struct SequenceCursor<'a, T> {
    elements: &'a [T],
    next_index: usize,
}

impl<'a, T> SequenceCursor<'a, T> {
    pub(crate) const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            next_index: 0,
        }
    }
}

impl<'a, T> Cursor for SequenceCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.next_index)?;
        self.next_index += 1;
        Some(element)
    }

    #[inline]
    fn reset(&mut self) {
        self.next_index = 0;
    }

    #[inline]
    fn position(&self) -> usize {
        self.next_index
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

// =============================================================================
// SnapshotCursor
// =============================================================================

/// A cursor over an owned copy of a container's elements.
///
/// Yields clones of the stored elements so that the snapshot survives any
/// number of resets.
#[derive(Debug, Clone)]
pub struct SnapshotCursor<T> {
    elements: Vec<T>,
    next_index: usize,
}

impl<T> SnapshotCursor<T> {
    /// Creates a cursor over `elements`.
    pub const fn new(elements: Vec<T>) -> Self {
        Self {
            elements,
            next_index: 0,
        }
    }
}

impl<T: Clone> Cursor for SnapshotCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.next_index)?.clone();
        self.next_index += 1;
        Some(element)
    }

    #[inline]
    fn reset(&mut self) {
        self.next_index = 0;
    }

    #[inline]
    fn position(&self) -> usize {
        self.next_index
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

impl<T> FromIterator<T> for SnapshotCursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Lazy, cancellable traversal over a borrowed [`Cursor`].
///
/// See the [module documentation](self) for the reset and resume rules.
/// Once a traversal has ended it keeps returning `None`; start a new one with
/// [`Cursor::traverse`] to go again.
#[derive(Debug)]
pub struct Traversal<'c, C: Cursor> {
    cursor: &'c mut C,
    finished: bool,
}

impl<'c, C: Cursor> Traversal<'c, C> {
    fn new(cursor: &'c mut C) -> Self {
        Self {
            cursor,
            finished: false,
        }
    }
}

impl<C: Cursor> Iterator for Traversal<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.cursor.is_done() {
            tracing::trace!(
                position = self.cursor.position(),
                "traversal exhausted, resetting cursor"
            );
            self.cursor.reset();
            self.finished = true;
            return None;
        }
        self.cursor.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            let remaining = self.cursor.remaining();
            (remaining, Some(remaining))
        }
    }
}

impl<C: Cursor> FusedIterator for Traversal<'_, C> {}

// =============================================================================
// Tests
// =============================================================================
