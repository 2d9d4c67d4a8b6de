//! Baseline validator over the JSON document form of a schema.
//!
//! Unlike [`crate::TypeCompiler`], this walks the document on every call, the
//! way a generic JSON Schema interpreter would. It understands the subset of
//! keywords that [`Schema::to_json`] emits.

use std::collections::HashMap;

use schema_algebra::Schema;
use serde_json::{Map, Value};

use crate::error::CheckError;
use crate::keywords::{is_integer, LengthBounds, NumberBounds, ADDITIONAL_PROPERTIES};

#[derive(Debug, Clone)]
pub struct JsonSchemaValidator {
    root: Value,
    refs: HashMap<String, Value>,
}

impl JsonSchemaValidator {
    pub fn new(document: Value) -> Self {
        let mut refs = HashMap::new();
        collect_ids(&document, &mut refs);
        Self {
            root: document,
            refs,
        }
    }

    pub fn from_schema(schema: &Schema) -> Result<Self, CheckError> {
        Ok(Self::new(schema.to_json()?))
    }

    pub fn document(&self) -> &Value {
        &self.root
    }

    pub fn validate(&self, value: &Value) -> bool {
        self.check(&self.root, value)
    }

    fn check(&self, doc: &Value, value: &Value) -> bool {
        let doc = match doc {
            Value::Object(doc) => doc,
            Value::Bool(b) => return *b,
            _ => return false,
        };
        if let Some(target) = doc.get("$ref").and_then(Value::as_str) {
            match self.refs.get(target) {
                Some(target) if self.check(target, value) => {}
                _ => return false,
            }
        }
        if let Some(ty) = doc.get("type").and_then(Value::as_str) {
            if !type_matches(ty, value) {
                return false;
            }
        }
        if let Some(expected) = doc.get("const") {
            if expected != value {
                return false;
            }
        }
        if let Some(n) = value.as_f64() {
            if !NumberBounds::from_document(doc).contains(n) {
                return false;
            }
        }
        if let Some(s) = value.as_str() {
            if !LengthBounds::from_document(doc).contains(s.chars().count()) {
                return false;
            }
        }
        if let Some(obj) = value.as_object() {
            if !self.check_object(doc, obj) {
                return false;
            }
        }
        if let (Some(items), Some(arr)) = (doc.get("items"), value.as_array()) {
            if !arr.iter().all(|v| self.check(items, v)) {
                return false;
            }
        }
        if let Some(any_of) = doc.get("anyOf").and_then(Value::as_array) {
            if !any_of.iter().any(|d| self.check(d, value)) {
                return false;
            }
        }
        if let Some(all_of) = doc.get("allOf").and_then(Value::as_array) {
            if !all_of.iter().all(|d| self.check(d, value)) {
                return false;
            }
        }
        if let Some(not) = doc.get("not") {
            if self.check(not, value) {
                return false;
            }
        }
        true
    }

    fn check_object(&self, doc: &Map<String, Value>, obj: &Map<String, Value>) -> bool {
        let properties = doc.get("properties").and_then(Value::as_object);
        if let Some(required) = doc.get("required").and_then(Value::as_array) {
            let all_present = required
                .iter()
                .filter_map(Value::as_str)
                .all(|k| obj.contains_key(k));
            if !all_present {
                return false;
            }
        }
        if let Some(properties) = properties {
            for (key, prop) in properties {
                if let Some(v) = obj.get(key) {
                    if !self.check(prop, v) {
                        return false;
                    }
                }
            }
        }
        if doc.get(ADDITIONAL_PROPERTIES) == Some(&Value::Bool(false)) {
            let known = |k: &String| properties.is_some_and(|p| p.contains_key(k));
            if !obj.keys().all(known) {
                return false;
            }
        }
        true
    }
}

fn type_matches(ty: &str, value: &Value) -> bool {
    match ty {
        "null" => value.is_null(),
        "boolean" => value.is_boolean(),
        "integer" => is_integer(value),
        "number" => value.is_number(),
        "string" => value.is_string(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => false,
    }
}

fn collect_ids(doc: &Value, refs: &mut HashMap<String, Value>) {
    match doc {
        Value::Object(map) => {
            if let Some(id) = map.get("$id").and_then(Value::as_str) {
                refs.insert(id.to_string(), doc.clone());
            }
            for v in map.values() {
                collect_ids(v, refs);
            }
        }
        Value::Array(items) => {
            for v in items {
                collect_ids(v, refs);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn interprets_plain_documents() {
        let v = JsonSchemaValidator::new(json!({
            "type": "object",
            "properties": { "a": { "type": "string", "minLength": 1 } },
            "required": ["a"],
            "additionalProperties": false
        }));
        assert!(v.validate(&json!({ "a": "x" })));
        assert!(!v.validate(&json!({ "a": "" })));
        assert!(!v.validate(&json!({})));
        assert!(!v.validate(&json!({ "a": "x", "b": 1 })));
    }

    #[test]
    fn follows_refs() {
        let v = JsonSchemaValidator::new(json!({
            "$id": "Node",
            "type": "object",
            "properties": { "next": { "$ref": "Node" } },
            "required": []
        }));
        assert!(v.validate(&json!({ "next": { "next": {} } })));
        assert!(!v.validate(&json!({ "next": { "next": 1 } })));
    }

    #[test]
    fn dangling_ref_rejects() {
        let v = JsonSchemaValidator::new(json!({ "$ref": "Missing" }));
        assert!(!v.validate(&json!(null)));
    }
}
