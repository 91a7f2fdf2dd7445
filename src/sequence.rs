//! Growable ordered sequence with positional editing operations.
//!
//! This module provides [`Sequence`], a mutable, index-addressable container
//! that layers richer operations over a `Vec`: splice and replace by range,
//! insert after a position, push and pop at either end, projection sorts,
//! predicate scans and in-place filtering.
//!
//! # Overview
//!
//! - Every operation mutates the sequence in place unless it is documented as
//!   producing a copy ([`slice`](Sequence::slice), [`copy`](Sequence::copy), the
//!   removed segment returned by [`splice`](Sequence::splice) and
//!   [`replace`](Sequence::replace)). Copies never alias the source storage.
//! - Positional arguments are validated before any mutation; invalid ones
//!   yield [`OutOfRange`] and leave the sequence untouched.
//! - Only [`at`](Sequence::at) resolves negative indices (`length + index`).
//!   Mutating operations take plain non-negative positions.
//! - Operations needing extra capabilities on `T` (equality, ordering, text
//!   rendering) live in separate `impl` blocks bounded by those capabilities.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity       |
//! |------------------------|------------------|
//! | `push` / `pop`         | O(1) amortized   |
//! | `unshift` / `shift`    | O(n)             |
//! | `at` / `set`           | O(1)             |
//! | `insert`               | O(n + k)         |
//! | `slice`                | O(end - start)   |
//! | `splice` / `replace`   | O(n + k)         |
//! | `filter` / `compact`   | O(n)             |
//! | `sort_*`               | O(n log n)       |
//!
//! # Examples
//!
//! ```rust
//! use convenient_structures::Sequence;
//!
//! let mut sequence = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
//!
//! let removed = sequence.splice(1, 3).unwrap();
//! assert_eq!(removed.as_slice(), &[2, 3]);
//! assert_eq!(sequence.as_slice(), &[1, 4, 5]);
//!
//! sequence.push(6).unshift(0);
//! assert_eq!(sequence.at(-1), Ok(&6));
//! assert_eq!(sequence.to_vec(), vec![0, 1, 4, 5, 6]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{OutOfRange, RangeResult};
use crate::iteration::{Iterable, SequenceCursor, SnapshotCursor};
use crate::render::Render;

/// A growable, ordered, index-addressable container.
///
/// # Type Parameters
///
/// * `T` - The element type. Unconstrained for the core operations; some
///   operations require `Clone`, `PartialEq`, `Ord` or [`Render`].
///
/// # Examples
///
/// ```rust
/// use convenient_structures::Sequence;
///
/// let mut sequence: Sequence<i32> = (1..=5).collect();
/// sequence.filter(|value, _| value % 2 == 1);
/// assert_eq!(sequence.to_vec(), vec![1, 3, 5]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(Sequence<i32>: Clone, Default, Send, Sync);

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates a sequence that takes ownership of `elements`.
    #[inline]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements. Alias of [`len`](Self::len).
    #[inline]
    pub fn length(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // =========================================================================
    // Ends
    // =========================================================================

    /// Appends an element to the end.
    pub fn push(&mut self, element: T) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Appends every element of `elements` to the end, in order.
    pub fn push_many<I: IntoIterator<Item = T>>(&mut self, elements: I) -> &mut Self {
        self.elements.extend(elements);
        self
    }

    /// Prepends an element to the start.
    pub fn unshift(&mut self, element: T) -> &mut Self {
        self.elements.insert(0, element);
        self
    }

    /// Prepends every element of `elements`, keeping their relative order.
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![3, 4]);
    /// sequence.unshift_many([1, 2]);
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn unshift_many<I: IntoIterator<Item = T>>(&mut self, elements: I) -> &mut Self {
        self.elements.splice(0..0, elements);
        self
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::Empty`] when the sequence is empty.
    pub fn pop(&mut self) -> RangeResult<T> {
        self.elements.pop().ok_or_else(|| rejected(OutOfRange::Empty))
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::Empty`] when the sequence is empty.
    pub fn shift(&mut self) -> RangeResult<T> {
        if self.elements.is_empty() {
            return Err(rejected(OutOfRange::Empty));
        }
        Ok(self.elements.remove(0))
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    // =========================================================================
    // Positional Access
    // =========================================================================

    /// Returns the element at `index`, counting from the end when negative.
    ///
    /// `at(-1)` is the last element and `at(i)` equals `at(i - length)` for
    /// every valid non-negative `i`.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::Index`] when the resolved index is not in
    /// `0..length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let sequence = Sequence::from_vec(vec!['a', 'b', 'c']);
    /// assert_eq!(sequence.at(0), Ok(&'a'));
    /// assert_eq!(sequence.at(-1), Ok(&'c'));
    /// assert!(sequence.at(-4).is_err());
    /// ```
    pub fn at(&self, index: isize) -> RangeResult<&T> {
        self.resolve_index(index)
            .map(|resolved| &self.elements[resolved])
            .ok_or_else(|| {
                rejected(OutOfRange::Index {
                    index,
                    length: self.elements.len(),
                })
            })
    }

    /// Returns the element at a non-negative `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::Index`] when `index >= length`.
    pub fn set(&mut self, index: usize, value: T) -> RangeResult<&mut Self> {
        let length = self.elements.len();
        let Some(slot) = self.elements.get_mut(index) else {
            return Err(rejected(OutOfRange::Index {
                index: index_for_error(index),
                length,
            }));
        };
        *slot = value;
        Ok(self)
    }

    /// Inserts `elements` immediately after position `after`, shifting the
    /// tail right.
    ///
    /// `after` is a plain position: it is never resolved from the end. To
    /// insert before the first element use [`unshift_many`](Self::unshift_many).
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::InsertPosition`] when `after >= length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 2, 5]);
    /// sequence.insert(1, [3, 4]).unwrap();
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn insert<I: IntoIterator<Item = T>>(
        &mut self,
        after: usize,
        elements: I,
    ) -> RangeResult<&mut Self> {
        let length = self.elements.len();
        if after >= length {
            return Err(rejected(OutOfRange::InsertPosition { after, length }));
        }
        let position = after + 1;
        self.elements.splice(position..position, elements);
        Ok(self)
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// Removes the half-open range `[start, end)` and returns the removed
    /// elements as a new sequence.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::Range`] when `end < start` or `end > length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
    /// let removed = sequence.splice(1, 3).unwrap();
    /// assert_eq!(removed.to_vec(), vec![2, 3]);
    /// assert_eq!(sequence.to_vec(), vec![1, 4, 5]);
    /// ```
    pub fn splice(&mut self, start: usize, end: usize) -> RangeResult<Self> {
        self.check_range(start, end)?;
        Ok(self.elements.drain(start..end).collect())
    }

    /// Replaces the half-open range `[start, end)` with `elements` and returns
    /// the removed elements as a new sequence.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::Range`] when `end < start` or `end > length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec!["a", "b", "c", "d"]);
    /// let removed = sequence.replace(1, 3, ["x"]).unwrap();
    /// assert_eq!(removed.to_vec(), vec!["b", "c"]);
    /// assert_eq!(sequence.to_vec(), vec!["a", "x", "d"]);
    /// ```
    pub fn replace<I: IntoIterator<Item = T>>(
        &mut self,
        start: usize,
        end: usize,
        elements: I,
    ) -> RangeResult<Self> {
        self.check_range(start, end)?;
        Ok(self.elements.splice(start..end, elements).collect())
    }

    // =========================================================================
    // Whole-Sequence Mutation
    // =========================================================================

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.elements.reverse();
        self
    }

    /// Keeps only the elements for which `predicate(value, index)` holds.
    ///
    /// `index` is the position each element had before filtering started.
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec!['a', 'b', 'c', 'd']);
    /// sequence.filter(|_, index| index % 2 == 0);
    /// assert_eq!(sequence.to_vec(), vec!['a', 'c']);
    /// ```
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        let mut index = 0;
        self.elements.retain(|element| {
            let keep = predicate(element, index);
            index += 1;
            keep
        });
        self
    }

    /// Sorts in place with a three-way comparator. The sort is stable.
    pub fn sort_with<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.elements.sort_by(|left, right| compare(left, right));
        self
    }

    /// Sorts in place in descending comparator order. The sort is stable.
    pub fn sort_with_reverse<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.elements.sort_by(|left, right| compare(right, left));
        self
    }

    /// Sorts in place by a projected key. The sort is stable.
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let mut words = Sequence::from_vec(vec!["ccc", "a", "bb"]);
    /// words.sort_by_key(|word| word.len());
    /// assert_eq!(words.to_vec(), vec!["a", "bb", "ccc"]);
    /// ```
    pub fn sort_by_key<C, F>(&mut self, mut project: F) -> &mut Self
    where
        C: Ord,
        F: FnMut(&T) -> C,
    {
        self.elements
            .sort_by(|left, right| project(left).cmp(&project(right)));
        self
    }

    /// Sorts in place by a projected key, largest first. The sort is stable.
    pub fn sort_by_key_reverse<C, F>(&mut self, mut project: F) -> &mut Self
    where
        C: Ord,
        F: FnMut(&T) -> C,
    {
        self.elements
            .sort_by(|left, right| project(right).cmp(&project(left)));
        self
    }

    // =========================================================================
    // Scans
    // =========================================================================

    /// Returns the first element satisfying `predicate(value, index)`.
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .find(|&(index, element)| predicate(element, index))
            .map(|(_, element)| element)
    }

    /// Returns the index of the first element satisfying
    /// `predicate(value, index)`.
    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .position(|(index, element)| predicate(element, index))
    }

    /// Returns `true` if at least one element satisfies the predicate.
    pub fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.find_index(predicate).is_some()
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// An empty sequence satisfies every predicate.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .all(|(index, element)| predicate(element, index))
    }

    /// Calls `callback(value, index)` for every element, in order.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, element) in self.elements.iter().enumerate() {
            callback(element, index);
        }
    }

    /// Transforms every element into a new sequence. The source is untouched.
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let numbers = Sequence::from_vec(vec![1, 2, 3]);
    /// let labels = numbers.map_to(|number| format!("#{number}"));
    /// assert_eq!(labels.to_vec(), vec!["#1", "#2", "#3"]);
    /// assert_eq!(numbers.len(), 3);
    /// ```
    pub fn map_to<U, F>(&self, mapper: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence::from_vec(self.elements.iter().map(mapper).collect())
    }

    // =========================================================================
    // Views and Exports
    // =========================================================================

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence and returns its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a cursor bound to the live storage of this sequence.
    ///
    /// The cursor borrows the sequence, so it cannot be mutated while the
    /// cursor is in use.
    #[inline]
    pub fn cursor(&self) -> SequenceCursor<'_, T> {
        SequenceCursor::new(&self.elements)
    }

    fn resolve_index(&self, index: isize) -> Option<usize> {
        let length = self.elements.len();
        let resolved = if index < 0 {
            length.checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        (resolved < length).then_some(resolved)
    }

    fn check_range(&self, start: usize, end: usize) -> RangeResult<()> {
        let length = self.elements.len();
        if start > end || end > length {
            return Err(rejected(OutOfRange::Range { start, end, length }));
        }
        Ok(())
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence holding copies of `[start, end)`.
    ///
    /// # Errors
    ///
    /// Fails with [`OutOfRange::Range`] when `end < start` or `end > length`.
    pub fn slice(&self, start: usize, end: usize) -> RangeResult<Self> {
        self.check_range(start, end)?;
        Ok(Self::from_vec(self.elements[start..end].to_vec()))
    }

    /// Appends copies of the elements of `other`. `other` is left unchanged.
    pub fn concat(&mut self, other: &Self) -> &mut Self {
        self.elements.extend_from_slice(&other.elements);
        self
    }

    /// Returns an independent shallow copy.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the elements as a new `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Returns a cursor over a copy of the current elements.
    pub fn snapshot_cursor(&self) -> SnapshotCursor<T> {
        SnapshotCursor::new(self.elements.clone())
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if any element equals `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Returns the index of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == element)
    }

    /// Returns the index of the last element equal to `element`.
    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().rposition(|candidate| candidate == element)
    }

    /// Collapses runs of consecutive equal elements into one element.
    ///
    /// Duplicates that are not adjacent are kept.
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 1, 2, 1]);
    /// sequence.compact();
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 1]);
    /// ```
    pub fn compact(&mut self) -> &mut Self {
        self.elements.dedup();
        self
    }
}

impl<T: Ord> Sequence<T> {
    /// Compares two sequences lexicographically.
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    /// use std::cmp::Ordering;
    ///
    /// let short = Sequence::from_vec(vec![1, 2]);
    /// let long = Sequence::from_vec(vec![1, 2, 0]);
    /// assert_eq!(short.compare(&long), Ordering::Less);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        self.elements.cmp(&other.elements)
    }
}

impl<T: Render> Sequence<T> {
    /// Renders every element as text and joins them with `separator`.
    ///
    /// ```rust
    /// use convenient_structures::Sequence;
    ///
    /// let sequence = Sequence::from_vec(vec![1.5, 2.0, 3.25]);
    /// assert_eq!(sequence.join(", "), "1.5, 2, 3.25");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        let mut buffer = String::new();
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                buffer.push_str(separator);
            }
            element.render(&mut buffer);
        }
        buffer
    }
}

/// Logs a rejected positional argument and hands the error back.
fn rejected(error: OutOfRange) -> OutOfRange {
    tracing::debug!(%error, "rejected positional argument");
    error
}

fn index_for_error(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> Iterable for Sequence<T> {
    type Cursor<'a>
        = SequenceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SequenceCursor::new(&self.elements)
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
