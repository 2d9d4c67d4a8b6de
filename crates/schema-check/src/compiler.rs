//! Schema → checker compilation.
//!
//! A schema is compiled once into a tree of closures; checking a value then
//! walks only the closures, never the schema. Self references inside a
//! recursive node are bound through a weak handle to the recursive node's
//! own checker, so compiled checkers hold no reference cycles.

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use schema_algebra::{is_schema, RecursionId, Schema, SchemaError, SchemaKind, WrapState};
use serde_json::Value;
use tracing::debug;

use crate::error::CheckError;
use crate::keywords::{is_integer, LengthBounds, NumberBounds, ADDITIONAL_PROPERTIES};

pub type CheckFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A compiled, reusable check for one schema.
#[derive(Clone)]
pub struct Checker {
    schema: Schema,
    check: CheckFn,
}

impl Checker {
    pub fn check(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("schema", &self.schema.kind_name())
            .finish()
    }
}

/// Compiles schemas into [`Checker`]s.
pub struct TypeCompiler;

impl TypeCompiler {
    pub fn compile(schema: &Schema) -> Result<Checker, CheckError> {
        if !is_schema(schema) {
            return Err(SchemaError::InvalidSchemaKind {
                kind: schema.kind_name().to_string(),
            }
            .into());
        }
        let mut scope = Vec::new();
        let check = compile_node(schema, &mut scope)?;
        debug!(kind = schema.kind_name(), "compiled checker");
        Ok(Checker {
            schema: schema.clone(),
            check,
        })
    }
}

type Scope = Vec<(RecursionId, Weak<OnceLock<CheckFn>>)>;

fn check_fn(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> CheckFn {
    Arc::new(f)
}

fn compile_all(schemas: &[Schema], scope: &mut Scope) -> Result<Vec<CheckFn>, CheckError> {
    schemas.iter().map(|s| compile_node(s, scope)).collect()
}

fn compile_node(schema: &Schema, scope: &mut Scope) -> Result<CheckFn, CheckError> {
    let options = &schema.options;
    let check = match &schema.kind {
        SchemaKind::Any | SchemaKind::Unknown => check_fn(|_| true),
        SchemaKind::Never => check_fn(|_| false),
        SchemaKind::Null => check_fn(Value::is_null),
        SchemaKind::Boolean => check_fn(Value::is_boolean),
        SchemaKind::Integer => {
            let bounds = NumberBounds::from_options(options);
            check_fn(move |v| is_integer(v) && v.as_f64().is_some_and(|n| bounds.contains(n)))
        }
        SchemaKind::Number => {
            let bounds = NumberBounds::from_options(options);
            check_fn(move |v| v.as_f64().is_some_and(|n| bounds.contains(n)))
        }
        SchemaKind::String => {
            let bounds = LengthBounds::from_options(options);
            check_fn(move |v| v.as_str().is_some_and(|s| bounds.contains(s.chars().count())))
        }
        SchemaKind::Literal(expected) => {
            let expected = expected.clone();
            check_fn(move |v| *v == expected)
        }
        SchemaKind::Array(items) => {
            let item = compile_node(items, scope)?;
            check_fn(move |v| v.as_array().is_some_and(|a| a.iter().all(|x| item(x))))
        }
        SchemaKind::This(id) => {
            let target = scope
                .iter()
                .rev()
                .find(|(frame, _)| frame == id)
                .map(|(_, cell)| cell.clone())
                .ok_or_else(|| CheckError::UnresolvedReference(id.to_string()))?;
            check_fn(move |v| {
                target
                    .upgrade()
                    .is_some_and(|cell| cell.get().is_some_and(|body| body(v)))
            })
        }
        SchemaKind::Object(props) => {
            let mut fields = Vec::with_capacity(props.len());
            for (name, prop) in props {
                let optional = WrapState::of(prop).is_optional();
                fields.push((name.clone(), optional, compile_node(prop.unwrapped(), scope)?));
            }
            let closed = options.get(ADDITIONAL_PROPERTIES) == Some(&Value::Bool(false));
            check_fn(move |v| {
                let Some(map) = v.as_object() else {
                    return false;
                };
                if closed && map.keys().any(|k| !fields.iter().any(|(name, _, _)| name == k)) {
                    return false;
                }
                fields.iter().all(|(name, optional, check)| match map.get(name) {
                    Some(x) => check(x),
                    None => *optional,
                })
            })
        }
        SchemaKind::Union(members) => {
            let checks = compile_all(members, scope)?;
            check_fn(move |v| checks.iter().any(|c| c(v)))
        }
        SchemaKind::Intersect(members) => {
            let checks = compile_all(members, scope)?;
            check_fn(move |v| checks.iter().all(|c| c(v)))
        }
        SchemaKind::Recursive { id, body } => {
            let cell: Arc<OnceLock<CheckFn>> = Arc::new(OnceLock::new());
            scope.push((id.clone(), Arc::downgrade(&cell)));
            let compiled = compile_node(body, scope);
            scope.pop();
            let _ = cell.set(compiled?);
            check_fn(move |v| cell.get().is_some_and(|body| body(v)))
        }
        SchemaKind::Optional(inner)
        | SchemaKind::Readonly(inner)
        | SchemaKind::ReadonlyOptional(inner) => compile_node(inner, scope)?,
        SchemaKind::Deferred(_) | SchemaKind::Mapped(_) => {
            return Err(CheckError::Unsupported {
                kind: schema.kind_name().to_string(),
            })
        }
    };
    Ok(check)
}
