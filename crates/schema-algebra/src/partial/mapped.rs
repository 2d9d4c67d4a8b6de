//! Deferred-result resolution for [`super::partial`].

use tracing::trace;

use super::engine::partial;
use crate::error::SchemaError;
use crate::schema::{DeferredResult, Options, Properties, Schema, S};

/// Materializes `deferred` and makes every property of every entry optional.
pub fn partial_from_deferred(
    deferred: &DeferredResult,
    options: Option<Options>,
) -> Result<Schema, SchemaError> {
    trace!(
        mapping = deferred.mapping.name(),
        keys = deferred.keys.len(),
        "materializing deferred result"
    );
    let props = deferred.materialize()?;
    partial_from_mapped_result(&props, options)
}

/// Applies [`partial`] to each entry of an already materialized mapping,
/// keeping key order. `options` is handed to every entry.
pub fn partial_from_mapped_result(
    props: &Properties,
    options: Option<Options>,
) -> Result<Schema, SchemaError> {
    let entries = props
        .iter()
        .map(|(key, schema)| Ok((key.clone(), partial(schema, options.clone())?)))
        .collect::<Result<Vec<_>, SchemaError>>()?;
    S.Mapped(entries)
}
