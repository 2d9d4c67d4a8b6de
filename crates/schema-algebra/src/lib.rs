//! `schema-algebra` — immutable descriptors of JSON data shapes and the
//! structural transforms that rewrite them.
//!
//! Schemas are built with the canonical constructors on [`SchemaBuilder`]
//! (usually through the global [`S`]), inspected through [`Schema`] and
//! [`SchemaKind`], and rewritten by transforms such as [`partial`]. No
//! operation edits an existing node; every transform returns a new tree.
//!
//! ```
//! use schema_algebra::{partial, SchemaKind, S};
//!
//! let user = S.Object([("name", S.str()), ("age", S.Readonly(S.num()))], None).unwrap();
//! let draft = partial(&user, None).unwrap();
//! assert!(draft.required().is_empty());
//! assert!(matches!(
//!     draft.properties().unwrap()["age"].kind,
//!     SchemaKind::ReadonlyOptional(_)
//! ));
//! ```

pub mod error;
pub mod modifier;
pub mod partial;
pub mod schema;

pub use error::SchemaError;
pub use modifier::WrapState;
pub use partial::partial;
pub use schema::{
    is_schema, DeferredResult, KeySet, Mapping, Options, Properties, RecursionId, Schema,
    SchemaBuilder, SchemaKind, S,
};
