use tracing::debug;

use super::mapped::{partial_from_deferred, partial_from_mapped_result};
use crate::error::SchemaError;
use crate::modifier::WrapState;
use crate::schema::{is_schema, Options, Properties, Schema, SchemaKind, S};

/// Constructs a schema in which every object property is optional.
///
/// Objects have each property moved through [`WrapState::make_optional`];
/// property value schemas themselves are not descended into. Unions and
/// intersections are rewritten member by member, recursive nodes have their
/// body rewritten under the same identity, and deferred mappings are handed
/// to the resolver. Any other kind degrades to an empty object.
///
/// A modifier wrapper around an object or recursive node survives the
/// rewrite; around any other kind it is dropped along with the rest of that
/// schema's metadata.
///
/// `options`, when given, is merged over the result's metadata with the
/// caller's keys winning. For deferred and mapped inputs it is applied to
/// every resulting entry instead.
///
/// Fails with [`SchemaError::InvalidSchemaKind`] if `schema` does not satisfy
/// [`is_schema`]; [`SchemaError::DuplicateProperty`] from a constructor is
/// passed through untouched.
pub fn partial(schema: &Schema, options: Option<Options>) -> Result<Schema, SchemaError> {
    if !is_schema(schema) {
        return Err(SchemaError::invalid(schema.kind_name()));
    }
    debug!(kind = schema.kind_name(), "partial");
    match &schema.kind {
        SchemaKind::Deferred(deferred) => partial_from_deferred(deferred, options),
        SchemaKind::Mapped(props) => partial_from_mapped_result(props, options),
        _ => {
            let resolved = resolve(schema)?;
            Ok(match options {
                Some(overrides) => S.with_options(resolved, &overrides),
                None => resolved,
            })
        }
    }
}

fn resolve(schema: &Schema) -> Result<Schema, SchemaError> {
    match &schema.kind {
        SchemaKind::Recursive { id, body } => Ok(S.Recursive(
            id.clone(),
            resolve(body)?,
            Some(schema.options.clone()),
        )),
        SchemaKind::Intersect(members) => Ok(S.Intersect(from_rest(members)?, None)),
        SchemaKind::Union(members) => Ok(S.Union(from_rest(members)?, None)),
        SchemaKind::Object(props) => from_object(props, &schema.options),
        SchemaKind::Optional(inner)
        | SchemaKind::Readonly(inner)
        | SchemaKind::ReadonlyOptional(inner) => {
            let resolved = resolve(inner)?;
            Ok(match inner.kind {
                SchemaKind::Object(_) | SchemaKind::Recursive { .. } => {
                    WrapState::of(schema).wrap(resolved)
                }
                _ => resolved,
            })
        }
        SchemaKind::Deferred(deferred) => partial_from_deferred(deferred, None),
        SchemaKind::Mapped(props) => partial_from_mapped_result(props, None),
        SchemaKind::Any
        | SchemaKind::Unknown
        | SchemaKind::Never
        | SchemaKind::Null
        | SchemaKind::Boolean
        | SchemaKind::Integer
        | SchemaKind::Number
        | SchemaKind::String
        | SchemaKind::Literal(_)
        | SchemaKind::Array(_)
        | SchemaKind::This(_) => S.Object(Properties::new(), None),
    }
}

fn from_rest(members: &[Schema]) -> Result<Vec<Schema>, SchemaError> {
    members.iter().map(resolve).collect()
}

fn from_object(props: &Properties, options: &Options) -> Result<Schema, SchemaError> {
    let properties = props.iter().map(|(name, prop)| {
        let state = WrapState::of(prop).make_optional();
        (name.clone(), state.wrap(prop.unwrapped().clone()))
    });
    S.Object(properties, Some(options.clone()))
}
