//! Build-hasher selection for [`OrderedMap`](crate::OrderedMap).
//!
//! The backing association of an `OrderedMap` is a `std::collections::HashMap`.
//! Which hasher it uses by default is chosen at compile time:
//!
//! | Feature  | `DefaultHashBuilder`                        |
//! |----------|---------------------------------------------|
//! | (none)   | `std::collections::hash_map::RandomState`   |
//! | `fxhash` | `rustc_hash::FxBuildHasher`                 |
//! | `ahash`  | `ahash::RandomState` (wins over `fxhash`)   |
//!
//! Enumeration order of an `OrderedMap` never depends on the hasher, because
//! it always follows the side list of keys.

#[cfg(feature = "ahash")]
/// Build hasher used by `OrderedMap` when no hasher is named.
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
/// Build hasher used by `OrderedMap` when no hasher is named.
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Build hasher used by `OrderedMap` when no hasher is named.
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
