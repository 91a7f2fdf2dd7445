//! # convenient-structures
//!
//! Mutable, ordered collections with richer editing operations than a bare
//! `Vec` or `HashMap`, and a single resumable iteration protocol shared by
//! both.
//!
//! ## Overview
//!
//! - **[`Sequence`]**: a growable ordered container with positional editing
//!   (insert after, splice, replace, slice), push and pop at either end,
//!   projection sorts, predicate scans, consecutive-run compaction and text
//!   joining.
//! - **[`OrderedMap`]**: a key/value map enumerating in first-insertion order.
//!   Re-setting a key keeps its position; deleting and re-setting it moves it
//!   to the end.
//! - **Iteration**: the [`Cursor`] protocol and its [`Traversal`] wrapper, a
//!   standard iterator that can be broken out of and later resumed, and that
//!   starts over after running to completion.
//!
//! Positional failures are reported as [`OutOfRange`]; lookups return
//! `Option`.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Sequence`, `OrderedMap` and
//!   `MapEntry`
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default map hasher
//! - `ahash`: use `ahash::RandomState` as the default map hasher
//! - `full`: `serde` and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use convenient_structures::prelude::*;
//!
//! let mut sequence = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
//! let removed = sequence.splice(1, 3).unwrap();
//! assert_eq!(removed.to_vec(), vec![2, 3]);
//! assert_eq!(sequence.to_vec(), vec![1, 4, 5]);
//!
//! let mut map = OrderedMap::new();
//! map.set("a", 1).set("b", 2);
//! map.delete(&"a").set("a", 9);
//! assert_eq!(map.keys().to_vec(), vec!["b", "a"]);
//!
//! let mut cursor = sequence.cursor();
//! let first: Vec<i32> = cursor.traverse().take(1).copied().collect();
//! let rest: Vec<i32> = cursor.traverse().copied().collect();
//! assert_eq!(first, vec![1]);
//! assert_eq!(rest, vec![4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use convenient_structures::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{OutOfRange, RangeResult};
    pub use crate::iteration::{Cursor, Iterable, SequenceCursor, SnapshotCursor, Traversal};
    pub use crate::ordered_map::{MapEntry, OrderedMap};
    pub use crate::render::Render;
    pub use crate::sequence::Sequence;
}

pub mod error;
pub mod hasher;
pub mod iteration;
pub mod ordered_map;
pub mod render;
pub mod sequence;

pub use error::{OutOfRange, RangeResult};
pub use hasher::DefaultHashBuilder;
pub use iteration::{Cursor, Iterable, SequenceCursor, SnapshotCursor, Traversal};
pub use ordered_map::{MapEntry, OrderedMap, OrderedMapIntoIterator, OrderedMapIterator};
pub use render::Render;
pub use sequence::Sequence;
