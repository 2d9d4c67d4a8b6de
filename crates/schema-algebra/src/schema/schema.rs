use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::deferred::DeferredResult;
use super::options::Options;

/// Ordered property name → schema mapping. Names are unique by construction.
pub type Properties = IndexMap<String, Schema>;

/// Identity token linking a [`SchemaKind::Recursive`] node to the
/// [`SchemaKind::This`] references inside its body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecursionId(String);

static NEXT_RECURSION_ID: AtomicU64 = AtomicU64::new(0);

/// Prefix of ids handed out by [`RecursionId::fresh`].
pub const FRESH_PREFIX: &str = "$T";

impl RecursionId {
    /// Wraps a caller-chosen id. Ids starting with [`FRESH_PREFIX`] are
    /// reserved for [`RecursionId::fresh`] and may collide with its output.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocates a process-unique id (`$T0`, `$T1`, ...).
    pub fn fresh() -> Self {
        let n = NEXT_RECURSION_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("{FRESH_PREFIX}{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecursionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind tag plus kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Any,
    Unknown,
    Never,
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Literal(Value),
    Array(Box<Schema>),
    /// Self reference, resolved against the enclosing recursive node.
    This(RecursionId),
    Object(Properties),
    Union(Vec<Schema>),
    Intersect(Vec<Schema>),
    Recursive {
        id: RecursionId,
        body: Box<Schema>,
    },
    Optional(Box<Schema>),
    Readonly(Box<Schema>),
    ReadonlyOptional(Box<Schema>),
    /// Mapping over a key set that has not been expanded yet.
    Deferred(DeferredResult),
    /// Materialized output of a deferred mapping: one schema per key.
    Mapped(Properties),
}

/// An immutable schema node.
///
/// Build values through [`crate::SchemaBuilder`]; the fields are public for
/// matching, and hand-assembled nodes are checked by [`crate::is_schema`]
/// before any transform touches them.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    pub options: Options,
}

impl Schema {
    pub(crate) fn from_parts(kind: SchemaKind, options: Options) -> Self {
        Self { kind, options }
    }

    /// Returns the kind identifier for this node.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            SchemaKind::Any => "Any",
            SchemaKind::Unknown => "Unknown",
            SchemaKind::Never => "Never",
            SchemaKind::Null => "Null",
            SchemaKind::Boolean => "Boolean",
            SchemaKind::Integer => "Integer",
            SchemaKind::Number => "Number",
            SchemaKind::String => "String",
            SchemaKind::Literal(_) => "Literal",
            SchemaKind::Array(_) => "Array",
            SchemaKind::This(_) => "This",
            SchemaKind::Object(_) => "Object",
            SchemaKind::Union(_) => "Union",
            SchemaKind::Intersect(_) => "Intersect",
            SchemaKind::Recursive { .. } => "Recursive",
            SchemaKind::Optional(_) => "Optional",
            SchemaKind::Readonly(_) => "Readonly",
            SchemaKind::ReadonlyOptional(_) => "ReadonlyOptional",
            SchemaKind::Deferred(_) => "DeferredResult",
            SchemaKind::Mapped(_) => "MappedResult",
        }
    }

    pub fn is_modifier(&self) -> bool {
        matches!(
            self.kind,
            SchemaKind::Optional(_) | SchemaKind::Readonly(_) | SchemaKind::ReadonlyOptional(_)
        )
    }

    /// The schema beneath any modifier wrapper.
    pub fn unwrapped(&self) -> &Schema {
        match &self.kind {
            SchemaKind::Optional(inner)
            | SchemaKind::Readonly(inner)
            | SchemaKind::ReadonlyOptional(inner) => inner,
            _ => self,
        }
    }

    pub fn properties(&self) -> Option<&Properties> {
        match &self.kind {
            SchemaKind::Object(props) | SchemaKind::Mapped(props) => Some(props),
            _ => None,
        }
    }

    /// Names of the object properties that are not optional, in declaration
    /// order. Empty for non-object kinds.
    pub fn required(&self) -> Vec<&str> {
        match &self.kind {
            SchemaKind::Object(props) => props
                .iter()
                .filter(|(_, s)| !crate::modifier::WrapState::of(s).is_optional())
                .map(|(k, _)| k.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_live_in_the_reserved_namespace() {
        let a = RecursionId::fresh();
        let b = RecursionId::fresh();
        assert_ne!(a, b);
        for id in [&a, &b] {
            assert!(id.as_str().starts_with(FRESH_PREFIX), "{id}");
            let plain = id.as_str().trim_start_matches(FRESH_PREFIX);
            assert_ne!(id, &RecursionId::new(format!("T{plain}")));
        }
    }
}
