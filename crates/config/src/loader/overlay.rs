//! The untyped key/value mapping accumulated across loader stages.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Accumulated configuration keys, iterated in byte-wise key order.
///
/// Values from files keep their JSON types (including arrays and objects);
/// values from environment entries and arguments are scalars produced by
/// [`infer_value`](crate::infer_value).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Overlay {
    entries: BTreeMap<String, Value>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Merge every top-level key of a parsed JSON object, overwriting on collision.
    pub fn extend_from(&mut self, object: Map<String, Value>) {
        self.entries.extend(object);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Convert into a generic JSON object.
    pub fn into_document(self) -> Map<String, Value> {
        self.entries.into_iter().collect()
    }
}

impl IntoIterator for Overlay {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
