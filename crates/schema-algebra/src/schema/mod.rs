//! Schema model: node kinds, metadata, constructors and the validity guard.

pub mod builder;
pub mod deferred;
pub mod guard;
mod json;
pub mod options;
#[allow(clippy::module_inception)]
pub mod schema;

pub use builder::{SchemaBuilder, S};
pub use deferred::{DeferredResult, KeySet, Mapping, MappingFn};
pub use guard::is_schema;
pub use options::Options;
pub use schema::*;
