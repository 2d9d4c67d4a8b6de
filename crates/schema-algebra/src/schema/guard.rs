//! Schema-validity predicate.

use super::schema::{Schema, SchemaKind};

/// Returns `true` when `schema` (and everything beneath it) is in the shape
/// the constructors produce:
///
/// - no options map carries a reserved key;
/// - modifier wrappers carry no options and never wrap another modifier;
/// - recursion ids are non-empty and a recursive body is not a modifier;
/// - deferred key sets hold no duplicate keys.
pub fn is_schema(schema: &Schema) -> bool {
    if schema.options.has_reserved_key() {
        return false;
    }
    match &schema.kind {
        SchemaKind::Any
        | SchemaKind::Unknown
        | SchemaKind::Never
        | SchemaKind::Null
        | SchemaKind::Boolean
        | SchemaKind::Integer
        | SchemaKind::Number
        | SchemaKind::String
        | SchemaKind::Literal(_) => true,
        SchemaKind::This(id) => !id.as_str().is_empty(),
        SchemaKind::Array(items) => is_schema(items),
        SchemaKind::Object(props) | SchemaKind::Mapped(props) => props.values().all(is_schema),
        SchemaKind::Union(members) | SchemaKind::Intersect(members) => {
            members.iter().all(is_schema)
        }
        SchemaKind::Recursive { id, body } => {
            !id.as_str().is_empty() && !body.is_modifier() && is_schema(body)
        }
        SchemaKind::Optional(inner)
        | SchemaKind::Readonly(inner)
        | SchemaKind::ReadonlyOptional(inner) => {
            schema.options.is_empty() && !inner.is_modifier() && is_schema(inner)
        }
        SchemaKind::Deferred(deferred) => !deferred.keys.has_duplicates(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Options, RecursionId};
    use crate::S;

    #[test]
    fn constructed_schemas_pass() {
        let rec = S
            .recursive(|this| S.Object([("id", S.str()), ("next", S.Optional(this))], None))
            .unwrap();
        let union = S.Union(vec![rec, S.Array(S.num(), None), S.Literal("x", None)], None);
        assert!(is_schema(&union));
    }

    #[test]
    fn nested_modifier_fails() {
        let inner = S.Optional(S.str());
        let bad = Schema {
            kind: SchemaKind::Readonly(Box::new(inner)),
            options: Options::new(),
        };
        assert!(!is_schema(&bad));
    }

    #[test]
    fn reserved_metadata_fails() {
        let bad = Schema {
            kind: SchemaKind::String,
            options: Options::new().with("$id", "Name"),
        };
        assert!(!is_schema(&bad));
        let nested = S.Union(vec![S.num(), bad], None);
        assert!(!is_schema(&nested));
    }

    #[test]
    fn empty_recursion_id_fails() {
        let bad = Schema {
            kind: SchemaKind::Recursive {
                id: RecursionId::new(""),
                body: Box::new(S.str()),
            },
            options: Options::new(),
        };
        assert!(!is_schema(&bad));
    }
}
