//! Deferred mappings over a key set.
//!
//! A [`DeferredResult`] records *which* keys a mapping ranges over and *what*
//! the mapping is, without producing the per-key schemas. Expansion happens
//! only when a consumer calls [`DeferredResult::materialize`].

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::schema::{Properties, Schema, SchemaKind};
use crate::error::SchemaError;

/// Per-key mapping operation.
pub type MappingFn = Arc<dyn Fn(&str) -> Result<Schema, SchemaError> + Send + Sync>;

/// Ordered set of property keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySet(Vec<String>);

impl KeySet {
    /// Builds a key set, rejecting repeated keys.
    pub fn new<I, K>(keys: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if out.contains(&key) {
                return Err(SchemaError::DuplicateProperty(key));
            }
            out.push(key);
        }
        Ok(Self(out))
    }

    /// Derives the key set described by a schema: a string or number literal,
    /// a union of such literals, or the property names of an object.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let mut keys = Vec::new();
        collect_keys(schema, &mut keys)?;
        let mut out: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys {
            // A union may name the same literal twice; the key set does not.
            if !out.contains(&key) {
                out.push(key);
            }
        }
        Ok(Self(out))
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn has_duplicates(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, k)| self.0[..i].contains(k))
    }
}

fn collect_keys(schema: &Schema, out: &mut Vec<String>) -> Result<(), SchemaError> {
    match &schema.kind {
        SchemaKind::Literal(Value::String(s)) => out.push(s.clone()),
        SchemaKind::Literal(Value::Number(n)) => out.push(n.to_string()),
        SchemaKind::Union(members) => {
            for member in members {
                collect_keys(member, out)?;
            }
        }
        SchemaKind::Object(props) => out.extend(props.keys().cloned()),
        _ => return Err(SchemaError::invalid(schema.kind_name())),
    }
    Ok(())
}

/// A named reference to a mapping operation.
///
/// Equality is identity: two mappings are equal when they carry the same name
/// and point at the same function.
#[derive(Clone)]
pub struct Mapping {
    name: String,
    func: MappingFn,
}

impl Mapping {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> Result<Schema, SchemaError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, key: &str) -> Result<Schema, SchemaError> {
        (self.func)(key)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping").field("name", &self.name).finish()
    }
}

/// Key set plus mapping, not yet expanded into a concrete tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredResult {
    pub keys: KeySet,
    pub mapping: Mapping,
}

impl DeferredResult {
    pub fn new(keys: KeySet, mapping: Mapping) -> Self {
        Self { keys, mapping }
    }

    /// Applies the mapping to every key, in key order.
    pub fn materialize(&self) -> Result<Properties, SchemaError> {
        let mut props = Properties::with_capacity(self.keys.len());
        for key in self.keys.keys() {
            let schema = self.mapping.apply(key)?;
            if props.insert(key.clone(), schema).is_some() {
                return Err(SchemaError::DuplicateProperty(key.clone()));
            }
        }
        Ok(props)
    }
}
