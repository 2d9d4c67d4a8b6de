//! Auxiliary schema metadata.
//!
//! Options are the opaque, ordered key/value annotations that ride along with
//! a schema node (`description`, `format`, `default`, ...). Structural keys are
//! reserved: constructors recompute them from the node payload and strip them
//! from whatever metadata they are handed.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Transform-tracking marker.
pub const TRANSFORM_KIND: &str = "$transform";
/// Identity key.
pub const ID: &str = "$id";
pub const REQUIRED: &str = "required";
pub const PROPERTIES: &str = "properties";
pub const ANY_OF: &str = "anyOf";
pub const ALL_OF: &str = "allOf";
pub const TYPE: &str = "type";

/// Keys no options map may carry once it has passed through a constructor.
pub const RESERVED_KEYS: [&str; 7] = [
    TRANSFORM_KIND,
    ID,
    REQUIRED,
    PROPERTIES,
    ANY_OF,
    ALL_OF,
    TYPE,
];

/// Ordered metadata record attached to every [`super::Schema`].
///
/// All helpers return new values; an `Options` is never edited through a
/// shared reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(IndexMap<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `key` set to `value`, keeping the key's position if
    /// it was already present.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Copy without the listed keys.
    pub fn discard(&self, keys: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Layers `overrides` on top of `self`. Keys present in both take the
    /// override's value; new keys are appended in the override's order.
    pub fn merge(&self, overrides: &Options) -> Self {
        let mut merged = self.0.clone();
        for (k, v) in &overrides.0 {
            merged.insert(k.clone(), v.clone());
        }
        Self(merged)
    }

    /// Copy with every reserved key stripped.
    pub fn normalized(&self) -> Self {
        self.discard(&RESERVED_KEYS)
    }

    pub fn has_reserved_key(&self) -> bool {
        RESERVED_KEYS.iter().any(|k| self.0.contains_key(*k))
    }

    pub fn to_json_map(&self) -> Map<String, Value> {
        self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}
