use schema_algebra::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The schema is valid but has no runtime check (deferred or mapped nodes).
    #[error("cannot compile schema kind '{kind}'")]
    Unsupported { kind: String },
    /// A `This` reference with no enclosing recursive node of that id.
    #[error("unresolved recursive reference '{0}'")]
    UnresolvedReference(String),
    /// No value satisfies the schema.
    #[error("no value can be created for schema kind '{kind}'")]
    Uninhabited { kind: String },
    #[error("recursion limit of {limit} reached while creating a value")]
    RecursionLimit { limit: usize },
    #[error("invalid schema for case '{case}'")]
    InvalidSchema { case: String },
    /// A backend rejected a value that was created from the same schema.
    #[error("{backend} rejected the sampled value for case '{case}'")]
    Rejected { case: String, backend: &'static str },
}
