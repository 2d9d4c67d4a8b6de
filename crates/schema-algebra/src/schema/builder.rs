//! Canonical schema constructors.
//!
//! Every schema value should come from one of these functions. They validate
//! structure (unique property names), collapse modifier wrappers, and strip
//! reserved metadata keys so the resulting node satisfies
//! [`crate::is_schema`].

use serde_json::Value;

use super::deferred::{DeferredResult, KeySet, Mapping};
use super::options::Options;
use super::schema::*;
use crate::error::SchemaError;
use crate::modifier::{strip as strip_modifier, WrapState};

/// Builder for constructing schema values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder;

#[allow(non_snake_case)]
impl SchemaBuilder {
    pub const fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Shorthand accessors (no options)

    pub fn str(&self) -> Schema {
        self.String(None)
    }

    pub fn num(&self) -> Schema {
        self.Number(None)
    }

    pub fn int(&self) -> Schema {
        self.Integer(None)
    }

    pub fn bool(&self) -> Schema {
        self.Boolean(None)
    }

    pub fn null(&self) -> Schema {
        self.Null(None)
    }

    pub fn any(&self) -> Schema {
        self.Any(None)
    }

    pub fn unknown(&self) -> Schema {
        self.Unknown(None)
    }

    pub fn never(&self) -> Schema {
        self.Never(None)
    }

    // ------------------------------------------------------------------
    // Leaves

    pub fn String(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::String, options)
    }

    pub fn Number(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::Number, options)
    }

    pub fn Integer(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::Integer, options)
    }

    pub fn Boolean(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::Boolean, options)
    }

    pub fn Null(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::Null, options)
    }

    pub fn Any(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::Any, options)
    }

    pub fn Unknown(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::Unknown, options)
    }

    pub fn Never(&self, options: Option<Options>) -> Schema {
        node(SchemaKind::Never, options)
    }

    pub fn Literal(&self, value: impl Into<Value>, options: Option<Options>) -> Schema {
        node(SchemaKind::Literal(value.into()), options)
    }

    pub fn Array(&self, items: Schema, options: Option<Options>) -> Schema {
        node(SchemaKind::Array(Box::new(items)), options)
    }

    /// Reference to the recursive node identified by `id`.
    pub fn This(&self, id: RecursionId) -> Schema {
        node(SchemaKind::This(id), None)
    }

    // ------------------------------------------------------------------
    // Composites

    /// Builds an object from `(name, schema)` pairs, in the given order.
    pub fn Object<I, K>(
        &self,
        properties: I,
        options: Option<Options>,
    ) -> Result<Schema, SchemaError>
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let props = collect_properties(properties)?;
        Ok(node(SchemaKind::Object(props), options))
    }

    /// Union of `members`. No members is `Never`; a single member is returned
    /// as-is with `options` layered over its own.
    pub fn Union(&self, members: Vec<Schema>, options: Option<Options>) -> Schema {
        self.variadic(members, options, SchemaKind::Union)
    }

    /// Intersection of `members`, collapsing like [`SchemaBuilder::Union`].
    pub fn Intersect(&self, members: Vec<Schema>, options: Option<Options>) -> Schema {
        self.variadic(members, options, SchemaKind::Intersect)
    }

    /// Recursive node with an explicit identity. A modifier on `body` is
    /// hoisted outside the recursive node.
    pub fn Recursive(&self, id: RecursionId, body: Schema, options: Option<Options>) -> Schema {
        let state = WrapState::of(&body);
        let body = strip_modifier(body);
        state.wrap(node(
            SchemaKind::Recursive {
                id,
                body: Box::new(body),
            },
            options,
        ))
    }

    /// Recursive node with a fresh identity. `f` receives the `This`
    /// reference to use for self references inside the body.
    pub fn recursive<F>(&self, f: F) -> Result<Schema, SchemaError>
    where
        F: FnOnce(Schema) -> Result<Schema, SchemaError>,
    {
        let id = RecursionId::fresh();
        let body = f(self.This(id.clone()))?;
        Ok(self.Recursive(id, body, None))
    }

    // ------------------------------------------------------------------
    // Modifiers

    pub fn Optional(&self, schema: Schema) -> Schema {
        let state = WrapState::of(&schema).make_optional();
        state.wrap(strip_modifier(schema))
    }

    pub fn Readonly(&self, schema: Schema) -> Schema {
        let state = WrapState::of(&schema).make_readonly();
        state.wrap(strip_modifier(schema))
    }

    pub fn ReadonlyOptional(&self, schema: Schema) -> Schema {
        self.Readonly(self.Optional(schema))
    }

    // ------------------------------------------------------------------
    // Deferred mappings

    pub fn Deferred(&self, keys: KeySet, mapping: Mapping) -> Schema {
        node(
            SchemaKind::Deferred(DeferredResult::new(keys, mapping)),
            None,
        )
    }

    /// Materialized mapping result, one schema per key.
    pub fn Mapped<I, K>(&self, properties: I) -> Result<Schema, SchemaError>
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let props = collect_properties(properties)?;
        Ok(node(SchemaKind::Mapped(props), None))
    }

    // ------------------------------------------------------------------
    // Re-issue

    /// Re-issues `schema` with `overrides` merged over its metadata; the
    /// override wins on conflicting keys. Modifier wrappers pass the
    /// metadata through to the wrapped schema.
    pub fn with_options(&self, schema: Schema, overrides: &Options) -> Schema {
        if overrides.is_empty() {
            return schema;
        }
        let state = WrapState::of(&schema);
        let inner = strip_modifier(schema);
        let options = inner.options.merge(overrides);
        state.wrap(node(inner.kind, Some(options)))
    }

    fn variadic(
        &self,
        mut members: Vec<Schema>,
        options: Option<Options>,
        make: fn(Vec<Schema>) -> SchemaKind,
    ) -> Schema {
        match members.len() {
            0 => self.Never(options),
            1 => {
                let only = members.remove(0);
                match options {
                    Some(options) => self.with_options(only, &options),
                    None => only,
                }
            }
            _ => node(make(members), options),
        }
    }
}

/// Global default schema builder.
pub static S: SchemaBuilder = SchemaBuilder;

fn node(kind: SchemaKind, options: Option<Options>) -> Schema {
    let options = options.map(|o| o.normalized()).unwrap_or_default();
    Schema::from_parts(kind, options)
}

fn collect_properties<I, K>(properties: I) -> Result<Properties, SchemaError>
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    let mut props = Properties::new();
    for (name, schema) in properties {
        let name = name.into();
        if props.contains_key(&name) {
            return Err(SchemaError::DuplicateProperty(name));
        }
        props.insert(name, schema);
    }
    Ok(props)
}
