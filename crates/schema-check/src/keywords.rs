//! Numeric and length constraints shared by the checkers and value creation.

use schema_algebra::Options;
use serde_json::{Map, Value};

pub const MINIMUM: &str = "minimum";
pub const MAXIMUM: &str = "maximum";
pub const MIN_LENGTH: &str = "minLength";
pub const MAX_LENGTH: &str = "maxLength";
pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
pub const DEFAULT: &str = "default";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberBounds {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl NumberBounds {
    fn new(minimum: Option<&Value>, maximum: Option<&Value>) -> Self {
        Self {
            minimum: minimum.and_then(Value::as_f64),
            maximum: maximum.and_then(Value::as_f64),
        }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::new(options.get(MINIMUM), options.get(MAXIMUM))
    }

    pub fn from_document(doc: &Map<String, Value>) -> Self {
        Self::new(doc.get(MINIMUM), doc.get(MAXIMUM))
    }

    pub fn contains(&self, n: f64) -> bool {
        self.minimum.map_or(true, |min| n >= min) && self.maximum.map_or(true, |max| n <= max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBounds {
    fn new(min: Option<&Value>, max: Option<&Value>) -> Self {
        let as_len = |v: &Value| v.as_u64().map(|n| n as usize);
        Self {
            min: min.and_then(as_len),
            max: max.and_then(as_len),
        }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::new(options.get(MIN_LENGTH), options.get(MAX_LENGTH))
    }

    pub fn from_document(doc: &Map<String, Value>) -> Self {
        Self::new(doc.get(MIN_LENGTH), doc.get(MAX_LENGTH))
    }

    pub fn contains(&self, len: usize) -> bool {
        self.min.map_or(true, |min| len >= min) && self.max.map_or(true, |max| len <= max)
    }
}

pub fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|f| f.fract() == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_bounds_are_inclusive() {
        let b = NumberBounds::from_options(&Options::new().with(MINIMUM, 1).with(MAXIMUM, 3));
        assert!(b.contains(1.0));
        assert!(b.contains(3.0));
        assert!(!b.contains(0.5));
        assert!(!b.contains(3.5));
        assert!(NumberBounds::default().contains(f64::MAX));
    }

    #[test]
    fn length_bounds_from_document() {
        let doc = json!({ "minLength": 2, "maxLength": 4 });
        let b = LengthBounds::from_document(doc.as_object().unwrap());
        assert!(!b.contains(1));
        assert!(b.contains(2));
        assert!(!b.contains(5));
    }

    #[test]
    fn integers() {
        assert!(is_integer(&json!(3)));
        assert!(is_integer(&json!(3.0)));
        assert!(!is_integer(&json!(3.5)));
        assert!(!is_integer(&json!("3")));
    }
}
