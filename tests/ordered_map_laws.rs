//! Property-based tests for OrderedMap.
//!
//! This module checks the key-order bookkeeping of OrderedMap against a
//! straightforward model (a `Vec` of keys plus a `HashMap`) over random
//! sequences of set and delete operations.

use convenient_structures::OrderedMap;
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Strategy for generating test data
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Set(String, i32),
    Delete(String),
}

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|key| key)
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (arbitrary_key(), any::<i32>()).prop_map(|(key, value)| Operation::Set(key, value)),
        1 => arbitrary_key().prop_map(Operation::Delete),
    ]
}

fn arbitrary_operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(arbitrary_operation(), 0..60)
}

struct Model {
    order: Vec<String>,
    values: HashMap<String, i32>,
}

impl Model {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }

    fn apply(&mut self, operation: &Operation) {
        match operation {
            Operation::Set(key, value) => {
                if self.values.insert(key.clone(), *value).is_none() {
                    self.order.push(key.clone());
                }
            }
            Operation::Delete(key) => {
                if self.values.remove(key).is_some() {
                    self.order.retain(|candidate| candidate != key);
                }
            }
        }
    }
}

fn run(operations: &[Operation]) -> (OrderedMap<String, i32>, Model) {
    let mut map = OrderedMap::new();
    let mut model = Model::new();
    for operation in operations {
        match operation {
            Operation::Set(key, value) => {
                map.set(key.clone(), *value);
            }
            Operation::Delete(key) => {
                map.delete(key.as_str());
            }
        }
        model.apply(operation);
    }
    (map, model)
}

// =============================================================================
// Key Order Invariant
// =============================================================================

proptest! {
    /// keys() holds every present key exactly once, in first-insertion order.
    #[test]
    fn prop_keys_match_model(operations in arbitrary_operations()) {
        let (map, model) = run(&operations);
        prop_assert_eq!(map.keys().into_vec(), model.order.clone());
        prop_assert_eq!(map.count(), model.values.len());
        for key in &model.order {
            prop_assert_eq!(map.get(key.as_str()), model.values.get(key));
        }
    }

    /// values() and entries() line up with keys().
    #[test]
    fn prop_enumerations_are_aligned(operations in arbitrary_operations()) {
        let (map, _) = run(&operations);
        let keys = map.keys().into_vec();
        let values = map.values().into_vec();
        let entries = map.entries().into_vec();

        prop_assert_eq!(keys.len(), values.len());
        for ((key, value), entry) in keys.iter().zip(&values).zip(&entries) {
            prop_assert_eq!(&entry.key, key);
            prop_assert_eq!(&entry.value, value);
            prop_assert_eq!(map.get(key.as_str()), Some(value));
        }
    }

    /// Re-setting an existing key never moves it.
    #[test]
    fn prop_update_keeps_position(operations in arbitrary_operations(), value: i32) {
        let (mut map, _) = run(&operations);
        let before = map.keys().into_vec();
        if let Some(key) = before.first().cloned() {
            map.set(key.clone(), value);
            prop_assert_eq!(map.keys().into_vec(), before);
            prop_assert_eq!(map.get(key.as_str()), Some(&value));
        }
    }

    /// Delete then set moves the key to the end.
    #[test]
    fn prop_delete_then_set_appends(operations in arbitrary_operations(), value: i32) {
        let (mut map, _) = run(&operations);
        if let Some(key) = map.keys().first().cloned() {
            map.delete(key.as_str()).set(key.clone(), value);
            let keys = map.keys();
            prop_assert_eq!(keys.last(), Some(&key));
        }
    }
}

// =============================================================================
// Copies and Exports
// =============================================================================

proptest! {
    /// Mutating a copy never changes the source.
    #[test]
    fn prop_copy_independence(operations in arbitrary_operations(), more in arbitrary_operations()) {
        let (source, _) = run(&operations);
        let keys_before = source.keys().into_vec();

        let mut copy = source.copy();
        for operation in &more {
            match operation {
                Operation::Set(key, value) => { copy.set(key.clone(), *value); }
                Operation::Delete(key) => { copy.delete(key.as_str()); }
            }
        }

        prop_assert_eq!(source.keys().into_vec(), keys_before.clone());
        prop_assert_eq!(source.count(), keys_before.len());
    }

    /// to_map() holds exactly the entries of the map.
    #[test]
    fn prop_to_map_matches(operations in arbitrary_operations()) {
        let (map, model) = run(&operations);
        let exported: HashMap<String, i32> = map.to_map().into_iter().collect();
        prop_assert_eq!(exported, model.values);
    }
}
