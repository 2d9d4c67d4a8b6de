//! Creates a value conforming to a schema.

use schema_algebra::{RecursionId, Schema, SchemaKind, WrapState};
use serde_json::{json, Map, Value};

use crate::error::CheckError;
use crate::keywords::{LengthBounds, NumberBounds, DEFAULT};

/// Produces the minimal conforming value for a schema: the `default` option
/// when one is set, otherwise a zero value that respects declared bounds.
/// Objects receive only their required properties and unions their first
/// member.
#[derive(Debug, Clone, Copy)]
pub struct ValueCreate {
    max_depth: usize,
}

impl Default for ValueCreate {
    fn default() -> Self {
        Self { max_depth: 32 }
    }
}

type Scope<'a> = Vec<(&'a RecursionId, &'a Schema)>;

impl ValueCreate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds how many self references may be followed on one path.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn create(&self, schema: &Schema) -> Result<Value, CheckError> {
        let mut scope = Vec::new();
        self.visit(schema, &mut scope, 0)
    }

    fn visit<'a>(
        &self,
        schema: &'a Schema,
        scope: &mut Scope<'a>,
        depth: usize,
    ) -> Result<Value, CheckError> {
        if let Some(default) = schema.options.get(DEFAULT) {
            return Ok(default.clone());
        }
        let options = &schema.options;
        let value = match &schema.kind {
            SchemaKind::Any | SchemaKind::Unknown => json!({}),
            SchemaKind::Null => Value::Null,
            SchemaKind::Boolean => Value::Bool(false),
            SchemaKind::Integer => {
                let bounds = NumberBounds::from_options(options);
                let n = match bounds.minimum {
                    Some(min) => min.ceil(),
                    None => lowest(bounds).floor(),
                };
                json!(n as i64)
            }
            SchemaKind::Number => json!(lowest(NumberBounds::from_options(options))),
            SchemaKind::String => {
                let len = LengthBounds::from_options(options).min.unwrap_or(0);
                Value::String(" ".repeat(len))
            }
            SchemaKind::Literal(value) => value.clone(),
            SchemaKind::Array(_) => json!([]),
            SchemaKind::Object(props) => {
                let mut out = Map::new();
                for (name, prop) in props {
                    if !WrapState::of(prop).is_optional() {
                        out.insert(name.clone(), self.visit(prop.unwrapped(), scope, depth)?);
                    }
                }
                Value::Object(out)
            }
            SchemaKind::Union(members) => match members.first() {
                Some(first) => self.visit(first, scope, depth)?,
                None => return Err(uninhabited(schema)),
            },
            SchemaKind::Intersect(members) => {
                let values = members
                    .iter()
                    .map(|m| self.visit(m, scope, depth))
                    .collect::<Result<Vec<_>, _>>()?;
                merge_intersection(values).ok_or_else(|| uninhabited(schema))?
            }
            SchemaKind::Never => return Err(uninhabited(schema)),
            SchemaKind::Recursive { id, body } => {
                scope.push((id, body.as_ref()));
                let created = self.visit(body, scope, depth);
                scope.pop();
                created?
            }
            SchemaKind::This(id) => {
                if depth >= self.max_depth {
                    return Err(CheckError::RecursionLimit {
                        limit: self.max_depth,
                    });
                }
                let body = scope
                    .iter()
                    .rev()
                    .find(|(frame, _)| *frame == id)
                    .map(|(_, body)| *body)
                    .ok_or_else(|| CheckError::UnresolvedReference(id.to_string()))?;
                self.visit(body, scope, depth + 1)?
            }
            SchemaKind::Optional(inner)
            | SchemaKind::Readonly(inner)
            | SchemaKind::ReadonlyOptional(inner) => self.visit(inner, scope, depth)?,
            SchemaKind::Deferred(_) | SchemaKind::Mapped(_) => {
                return Err(CheckError::Unsupported {
                    kind: schema.kind_name().to_string(),
                })
            }
        };
        Ok(value)
    }
}

fn lowest(bounds: NumberBounds) -> f64 {
    match (bounds.minimum, bounds.maximum) {
        (Some(min), _) => min,
        (None, Some(max)) if max < 0.0 => max,
        _ => 0.0,
    }
}

/// Objects merge key by key; otherwise every member must have produced the
/// same value.
fn merge_intersection(values: Vec<Value>) -> Option<Value> {
    if values.iter().all(Value::is_object) {
        let mut merged = Map::new();
        for value in values {
            if let Value::Object(map) = value {
                merged.extend(map);
            }
        }
        return Some(Value::Object(merged));
    }
    let first = values.first()?;
    values.iter().all(|v| v == first).then(|| first.clone())
}

fn uninhabited(schema: &Schema) -> CheckError {
    CheckError::Uninhabited {
        kind: schema.kind_name().to_string(),
    }
}
