//! JSON document form of a schema.
//!
//! This is the hand-off format for validators that work on plain JSON
//! documents. Property modifiers are expressed the JSON Schema way:
//! optional properties are left out of `required`, readonly ones carry
//! `"readOnly": true`.

use serde_json::{json, Map, Value};

use super::options::{ALL_OF, ANY_OF, ID, PROPERTIES, REQUIRED, TYPE};
use super::schema::{Schema, SchemaKind};
use crate::error::SchemaError;
use crate::modifier::WrapState;

impl Schema {
    /// Renders this schema as a JSON document. Structural keywords come
    /// first, followed by the node's own options.
    pub fn to_json(&self) -> Result<Value, SchemaError> {
        Ok(Value::Object(to_map(self)?))
    }
}

fn to_map(schema: &Schema) -> Result<Map<String, Value>, SchemaError> {
    let mut out = Map::new();
    match &schema.kind {
        SchemaKind::Any | SchemaKind::Unknown => {}
        SchemaKind::Never => {
            out.insert("not".into(), json!({}));
        }
        SchemaKind::Null => type_keyword(&mut out, "null"),
        SchemaKind::Boolean => type_keyword(&mut out, "boolean"),
        SchemaKind::Integer => type_keyword(&mut out, "integer"),
        SchemaKind::Number => type_keyword(&mut out, "number"),
        SchemaKind::String => type_keyword(&mut out, "string"),
        SchemaKind::Literal(value) => {
            out.insert("const".into(), value.clone());
        }
        SchemaKind::Array(items) => {
            type_keyword(&mut out, "array");
            out.insert("items".into(), Value::Object(to_map(items)?));
        }
        SchemaKind::This(id) => {
            out.insert("$ref".into(), Value::String(id.to_string()));
        }
        SchemaKind::Object(props) => {
            type_keyword(&mut out, "object");
            let mut properties = Map::new();
            for (name, prop) in props {
                let mut doc = to_map(prop.unwrapped())?;
                if WrapState::of(prop).is_readonly() {
                    doc.insert("readOnly".into(), Value::Bool(true));
                }
                properties.insert(name.clone(), Value::Object(doc));
            }
            out.insert(PROPERTIES.into(), Value::Object(properties));
            let required = schema.required();
            if !required.is_empty() {
                out.insert(REQUIRED.into(), json!(required));
            }
        }
        SchemaKind::Union(members) => {
            out.insert(ANY_OF.into(), members_json(members)?);
        }
        SchemaKind::Intersect(members) => {
            out.insert(ALL_OF.into(), members_json(members)?);
        }
        SchemaKind::Recursive { id, body } => {
            out.insert(ID.into(), Value::String(id.to_string()));
            out.extend(to_map(body)?);
        }
        // A wrapper only has meaning inside an object; standing alone it is
        // its inner schema.
        SchemaKind::Optional(inner)
        | SchemaKind::Readonly(inner)
        | SchemaKind::ReadonlyOptional(inner) => return to_map(inner),
        SchemaKind::Deferred(_) | SchemaKind::Mapped(_) => {
            return Err(SchemaError::Unrepresentable {
                kind: schema.kind_name().to_string(),
            })
        }
    }
    out.extend(schema.options.to_json_map());
    Ok(out)
}

fn type_keyword(out: &mut Map<String, Value>, name: &str) {
    out.insert(TYPE.into(), Value::String(name.into()));
}

fn members_json(members: &[Schema]) -> Result<Value, SchemaError> {
    members
        .iter()
        .map(|m| to_map(m).map(Value::Object))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}
