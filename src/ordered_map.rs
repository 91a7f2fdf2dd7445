//! Insertion-ordered key/value map.
//!
//! This module provides [`OrderedMap`], a mutable association from keys to
//! values that enumerates its entries in the order keys were first inserted,
//! and [`MapEntry`], the key/value pair it materializes for enumeration.
//!
//! # Key Order
//!
//! An `OrderedMap` pairs an unordered `HashMap` with a side list of keys. The
//! list holds every key present in the map exactly once:
//!
//! - setting a new key appends it to the end of the list;
//! - setting an existing key replaces the value and leaves the key in place;
//! - deleting a key removes it from the list;
//! - setting a previously deleted key appends it again, as a new insertion.
//!
//! Every enumeration (`keys`, `values`, `entries`, `for_each`, `find`,
//! `find_key`, `iter`, cursors, `Debug`, serialization) follows this list.
//! Maps built from a `HashMap` take their initial order from that map's own
//! enumeration, which is unspecified.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity       |
//! |------------------|------------------|
//! | `set`            | O(1) average     |
//! | `get` / `has`    | O(1) average     |
//! | `delete`         | O(n)             |
//! | `keys`/`values`  | O(n)             |
//! | `copy`           | O(n)             |
//!
//! # Examples
//!
//! ```rust
//! use convenient_structures::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set("a", 1).set("b", 2);
//!
//! map.delete(&"a");
//! map.set("a", 9);
//! assert_eq!(map.keys().to_vec(), vec!["b", "a"]);
//!
//! map.set("b", 20);
//! assert_eq!(map.values().to_vec(), vec![20, 9]);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use crate::hasher::DefaultHashBuilder;
use crate::iteration::{Iterable, SnapshotCursor};
use crate::sequence::Sequence;

// =============================================================================
// MapEntry
// =============================================================================

/// A key/value pair produced when enumerating an [`OrderedMap`].
///
/// Entries are materialized on demand and are not retained by the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapEntry<K, V> {
    /// The entry key.
    pub key: K,
    /// The entry value.
    pub value: V,
}

impl<K, V> MapEntry<K, V> {
    /// Creates an entry.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into a `(key, value)` tuple.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for MapEntry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<MapEntry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: MapEntry<K, V>) -> Self {
        entry.into_pair()
    }
}

// =============================================================================
// OrderedMap
// =============================================================================

/// A mutable key/value map that enumerates in first-insertion order.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Eq`, `Hash` and `Clone`.
/// * `V` - The value type.
/// * `S` - The build hasher of the backing `HashMap`. Defaults to
///   [`DefaultHashBuilder`].
///
/// # Examples
///
/// ```rust
/// use convenient_structures::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("one".to_string(), 1)
///     .set("two".to_string(), 2)
///     .set("three".to_string(), 3);
///
/// assert_eq!(map.get("two"), Some(&2));
/// assert_eq!(map.count(), 3);
/// assert_eq!(map.keys().join(","), "one,two,three");
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = DefaultHashBuilder> {
    entries: HashMap<K, V, S>,
    keys: Vec<K>,
}

static_assertions::assert_impl_all!(OrderedMap<String, i32>: Clone, Default, Send, Sync);

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map using the [`DefaultHashBuilder`].
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates an empty map using `hash_builder` for the backing `HashMap`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hash_builder),
            keys: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of entries. Alias of [`count`](Self::count).
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Wraps an existing `HashMap`.
    ///
    /// The initial key order is the enumeration order of `entries`, which is
    /// unspecified. Keys set afterwards are ordered deterministically.
    pub fn from_map(entries: HashMap<K, V, S>) -> Self {
        let keys = entries.keys().cloned().collect();
        Self { entries, keys }
    }

    /// Inserts or updates the value for `key`.
    ///
    /// A new key is appended to the key order; an existing key keeps its
    /// position.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(value);
            }
            Entry::Vacant(vacant) => {
                tracing::trace!(position = self.keys.len(), "appending key to insertion order");
                self.keys.push(vacant.key().clone());
                vacant.insert(value);
            }
        }
        self
    }

    /// Removes `key` and its value. Does nothing if `key` is absent.
    pub fn delete<Q>(&mut self, key: &Q) -> &mut Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key);
        self
    }

    /// Removes `key` and returns its value, if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.entries.remove(key)?;
        if let Some(position) = self
            .keys
            .iter()
            .position(|candidate| <K as Borrow<Q>>::borrow(candidate) == key)
        {
            tracing::trace!(position, "removing key from insertion order");
            self.keys.remove(position);
        }
        debug_assert_eq!(self.keys.len(), self.entries.len());
        Some(value)
    }

    /// Returns `true` if the map holds `key`.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns the value for `key`, or `None` if it is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// Mutating a value through this reference never changes the key order.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Returns a copy of the key order.
    ///
    /// The returned sequence is independent: mutating it does not affect the
    /// map.
    pub fn keys(&self) -> Sequence<K> {
        Sequence::from_vec(self.keys.clone())
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> OrderedMapIterator<'_, K, V, S> {
        OrderedMapIterator {
            keys: self.keys.iter(),
            entries: &self.entries,
        }
    }

    /// Calls `callback(key, value)` for every entry, in key order.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self {
            callback(key, value);
        }
    }

    /// Returns the value of the first entry, in key order, satisfying
    /// `predicate(key, value)`.
    pub fn find<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .find(|&(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Returns the key of the first entry, in key order, satisfying
    /// `predicate(key, value)`.
    pub fn find_key<F>(&self, mut predicate: F) -> Option<&K>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .find(|&(key, value)| predicate(key, value))
            .map(|(key, _)| key)
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Returns the values in key order.
    pub fn values(&self) -> Sequence<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns every entry in key order.
    ///
    /// ```rust
    /// use convenient_structures::{MapEntry, OrderedMap};
    ///
    /// let map: OrderedMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
    /// assert_eq!(
    ///     map.entries().to_vec(),
    ///     vec![MapEntry::new("x", 1), MapEntry::new("y", 2)]
    /// );
    /// ```
    pub fn entries(&self) -> Sequence<MapEntry<K, V>> {
        self.iter()
            .map(|(key, value)| MapEntry::new(key.clone(), value.clone()))
            .collect()
    }

    /// Returns a cursor over a snapshot of the current entries.
    ///
    /// Later mutation of the map is not visible through the cursor.
    pub fn cursor(&self) -> SnapshotCursor<MapEntry<K, V>> {
        SnapshotCursor::new(self.entries().into_vec())
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Returns an independent copy with its own association and key order.
    ///
    /// Values are cloned; for reference-counted values the referents stay
    /// shared.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Exports the entries as a plain `HashMap`, decoupled from later
    /// mutation of this map.
    pub fn to_map(&self) -> HashMap<K, V, S> {
        self.entries.clone()
    }
}

impl<K, V, S> Iterable for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Cursor<'a>
        = SnapshotCursor<MapEntry<K, V>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SnapshotCursor::new(self.entries().into_vec())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`OrderedMap`], in key order.
pub struct OrderedMapIterator<'a, K, V, S> {
    keys: std::slice::Iter<'a, K>,
    entries: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> Iterator for OrderedMapIterator<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.entries.get(key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for OrderedMapIterator<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.entries.get(key).map(|value| (key, value))
    }
}

impl<K, V, S> ExactSizeIterator for OrderedMapIterator<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

impl<K, V, S> FusedIterator for OrderedMapIterator<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

/// An owning iterator over the entries of an [`OrderedMap`], in key order.
pub struct OrderedMapIntoIterator<K, V, S> {
    keys: std::vec::IntoIter<K>,
    entries: HashMap<K, V, S>,
}

impl<K, V, S> Iterator for OrderedMapIntoIterator<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.entries.remove(&key)?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V, S> ExactSizeIterator for OrderedMapIntoIterator<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn from(entries: HashMap<K, V, S>) -> Self {
        Self::from_map(entries)
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = OrderedMapIntoIterator<K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedMapIntoIterator {
            keys: self.keys.into_iter(),
            entries: self.entries,
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedMapIterator<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: PartialEq,
    S: BuildHasher,
{
    /// Two maps are equal when they hold equal entries in the same key order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((left_key, left_value), (right_key, right_value))| {
                    left_key == right_key && left_value == right_value
                })
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> fmt::Display for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: fmt::Display,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone + serde::Serialize,
    V: serde::Serialize,
    S: BuildHasher,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V, S> {
    marker: std::marker::PhantomData<fn() -> OrderedMap<K, V, S>>,
}

#[cfg(feature = "serde")]
impl<K, V, S> OrderedMapVisitor<K, V, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for OrderedMapVisitor<K, V, S>
where
    K: Eq + Hash + Clone + serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = OrderedMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map: OrderedMap<K, V, S> = OrderedMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone + serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iteration::Cursor;
    use rstest::{fixture, rstest};
    use std::rc::Rc;

    #[fixture]
    fn numbers() -> OrderedMap<String, i32> {
        let mut map = OrderedMap::new();
        map.set("one".to_string(), 1)
            .set("two".to_string(), 2)
            .set("three".to_string(), 3);
        map
    }

    fn key_list<V, S: BuildHasher>(map: &OrderedMap<String, V, S>) -> Vec<String> {
        map.keys().into_vec()
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_follows_key_order(numbers: OrderedMap<String, i32>) {
        assert_eq!(format!("{numbers}"), "{one: 1, two: 2, three: 3}");
    }

    #[rstest]
    fn test_debug_follows_key_order(numbers: OrderedMap<String, i32>) {
        assert_eq!(
            format!("{numbers:?}"),
            r#"{"one": 1, "two": 2, "three": 3}"#
        );
    }

    #[rstest]
    fn test_display_empty() {
        let map: OrderedMap<String, i32> = OrderedMap::new();
        assert_eq!(format!("{map}"), "{}");
    }

    // =========================================================================
    // Basic Operations
    // =========================================================================

    #[rstest]
    fn test_set_and_get(mut numbers: OrderedMap<String, i32>) {
        numbers.set("four".to_string(), 4);
        assert_eq!(numbers.count(), 4);
        assert_eq!(numbers.get("one"), Some(&1));
        assert_eq!(numbers.get("four"), Some(&4));
        assert_eq!(numbers.get("five"), None);
    }

    #[rstest]
    fn test_has(numbers: OrderedMap<String, i32>) {
        assert!(numbers.has("two"));
        assert!(!numbers.has("four"));
    }

    #[rstest]
    fn test_set_existing_key_keeps_position(mut numbers: OrderedMap<String, i32>) {
        numbers.set("one".to_string(), 100);
        assert_eq!(numbers.get("one"), Some(&100));
        assert_eq!(key_list(&numbers), vec!["one", "two", "three"]);
        assert_eq!(numbers.count(), 3);
    }

    #[rstest]
    fn test_delete_removes_from_key_order(mut numbers: OrderedMap<String, i32>) {
        numbers.delete("two");
        assert_eq!(numbers.count(), 2);
        assert!(!numbers.has("two"));
        assert_eq!(key_list(&numbers), vec!["one", "three"]);
    }

    #[rstest]
    fn test_delete_absent_key_is_noop(mut numbers: OrderedMap<String, i32>) {
        numbers.delete("missing");
        assert_eq!(key_list(&numbers), vec!["one", "two", "three"]);
    }

    #[rstest]
    fn test_reinserted_key_moves_to_end(mut numbers: OrderedMap<String, i32>) {
        numbers.delete("one").set("one".to_string(), 9);
        assert_eq!(key_list(&numbers), vec!["two", "three", "one"]);
        assert_eq!(numbers.get("one"), Some(&9));
    }

    #[rstest]
    fn test_remove_returns_value(mut numbers: OrderedMap<String, i32>) {
        assert_eq!(numbers.remove("three"), Some(3));
        assert_eq!(numbers.remove("three"), None);
    }

    #[rstest]
    fn test_get_mut_does_not_reorder(mut numbers: OrderedMap<String, i32>) {
        if let Some(value) = numbers.get_mut("one") {
            *value += 10;
        }
        assert_eq!(numbers.get("one"), Some(&11));
        assert_eq!(key_list(&numbers), vec!["one", "two", "three"]);
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    #[rstest]
    fn test_keys_is_a_copy(numbers: OrderedMap<String, i32>) {
        let mut keys = numbers.keys();
        keys.push("extra".to_string());
        keys.reverse();
        assert_eq!(key_list(&numbers), vec!["one", "two", "three"]);
    }

    #[rstest]
    fn test_values_and_entries_follow_key_order(mut numbers: OrderedMap<String, i32>) {
        numbers.delete("one").set("one".to_string(), 1);
        assert_eq!(numbers.values().to_vec(), vec![2, 3, 1]);
        let entries: Vec<(String, i32)> = numbers
            .entries()
            .into_iter()
            .map(MapEntry::into_pair)
            .collect();
        assert_eq!(
            entries,
            vec![
                ("two".to_string(), 2),
                ("three".to_string(), 3),
                ("one".to_string(), 1)
            ]
        );
    }

    #[rstest]
    fn test_for_each_follows_key_order(numbers: OrderedMap<String, i32>) {
        let mut visited = Vec::new();
        numbers.for_each(|key, value| visited.push(format!("{key}={value}")));
        assert_eq!(visited, vec!["one=1", "two=2", "three=3"]);
    }

    #[rstest]
    fn test_find_and_find_key(numbers: OrderedMap<String, i32>) {
        assert_eq!(numbers.find(|_, value| *value > 1), Some(&2));
        assert_eq!(
            numbers.find_key(|_, value| *value > 1).map(String::as_str),
            Some("two")
        );
        assert_eq!(numbers.find(|_, value| *value > 3), None);
        assert_eq!(numbers.find_key(|key, _| key.is_empty()), None);
    }

    #[rstest]
    fn test_iter_is_double_ended(numbers: OrderedMap<String, i32>) {
        let reversed: Vec<i32> = numbers.iter().rev().map(|(_, value)| *value).collect();
        assert_eq!(reversed, vec![3, 2, 1]);
        assert_eq!(numbers.iter().len(), 3);
    }

    #[rstest]
    fn test_into_iter_follows_key_order(numbers: OrderedMap<String, i32>) {
        let values: Vec<i32> = numbers.into_iter().map(|(_, value)| value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    // =========================================================================
    // Copies and Exports
    // =========================================================================

    #[rstest]
    fn test_copy_is_independent(numbers: OrderedMap<String, i32>) {
        let mut copy = numbers.copy();
        copy.delete("one").set("four".to_string(), 4);
        assert_eq!(numbers.count(), 3);
        assert!(numbers.has("one"));
        assert!(!numbers.has("four"));
        assert_eq!(key_list(&copy), vec!["two", "three", "four"]);
    }

    #[rstest]
    fn test_copy_shares_reference_counted_values() {
        let shared = Rc::new(5);
        let mut map = OrderedMap::new();
        map.set("shared", Rc::clone(&shared));
        let copy = map.copy();
        assert!(Rc::ptr_eq(
            map.get("shared").unwrap(),
            copy.get("shared").unwrap()
        ));
    }

    #[rstest]
    fn test_to_map_is_decoupled(mut numbers: OrderedMap<String, i32>) {
        let exported = numbers.to_map();
        numbers.set("four".to_string(), 4).delete("one");
        assert_eq!(exported.len(), 3);
        assert_eq!(exported.get("one"), Some(&1));
        assert!(!exported.contains_key("four"));
    }

    #[rstest]
    fn test_from_map_registers_every_key() {
        let source: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        let map = OrderedMap::from_map(source);
        let mut keys = map.keys().into_vec();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(map.count(), 3);
    }

    #[rstest]
    fn test_from_iterator_orders_by_first_occurrence() {
        let map: OrderedMap<char, i32> = [('b', 1), ('a', 2), ('b', 3)].into_iter().collect();
        assert_eq!(map.keys().to_vec(), vec!['b', 'a']);
        assert_eq!(map.get(&'b'), Some(&3));
    }

    #[rstest]
    fn test_equality_depends_on_order() {
        let forward: OrderedMap<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        let backward: OrderedMap<i32, i32> = [(2, 2), (1, 1)].into_iter().collect();
        assert_ne!(forward, backward);
        assert_eq!(forward, forward.copy());
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    #[rstest]
    fn test_cursor_is_snapshot(mut numbers: OrderedMap<String, i32>) {
        let mut cursor = numbers.cursor();
        numbers.delete("one").set("four".to_string(), 4);
        let seen: Vec<i32> = cursor.traverse().map(|entry| entry.value).collect();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_iterable_cursor_resumes(numbers: OrderedMap<String, i32>) {
        let mut cursor = Iterable::cursor(&numbers);
        let first: Vec<String> = cursor.traverse().take(1).map(|entry| entry.key).collect();
        let rest: Vec<String> = cursor.traverse().map(|entry| entry.key).collect();
        assert_eq!(first, vec!["one"]);
        assert_eq!(rest, vec!["two", "three"]);
    }

    #[rstest]
    fn test_custom_hasher() {
        let mut map: OrderedMap<u32, &str, std::hash::BuildHasherDefault<std::hash::DefaultHasher>> =
            OrderedMap::default();
        map.set(2, "two").set(1, "one");
        assert_eq!(map.keys().to_vec(), vec![2, 1]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_in_key_order() {
        let mut map: OrderedMap<String, i32> = OrderedMap::new();
        map.set("z".to_string(), 1).set("a".to_string(), 2);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"z":1,"a":2}"#);
    }

    #[rstest]
    fn test_deserialize_preserves_document_order() {
        let map: OrderedMap<String, i32> =
            serde_json::from_str(r#"{"c":3,"a":1,"b":2}"#).unwrap();
        assert_eq!(map.keys().join(""), "cab");
    }

    #[rstest]
    fn test_map_entry_shape() {
        let entry = MapEntry::new("k", 1);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"key":"k","value":1}"#
        );
    }
}
