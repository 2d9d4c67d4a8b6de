//! Errors raised by schema constructors and transforms.

use thiserror::Error;

/// Failure taxonomy shared by the constructors and the transform engine.
///
/// None of these are retryable: every operation in this crate is a pure
/// computation, so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The input did not satisfy [`crate::is_schema`], or a constructor was
    /// handed a schema of a kind it cannot accept.
    #[error("invalid schema kind: {kind}")]
    InvalidSchemaKind { kind: String },
    /// Two properties (or keys) with the same name.
    #[error("duplicate property: {0}")]
    DuplicateProperty(String),
    /// The node has no JSON document form.
    #[error("schema kind '{kind}' has no JSON representation")]
    Unrepresentable { kind: String },
}

impl SchemaError {
    pub(crate) fn invalid(kind: impl Into<String>) -> Self {
        Self::InvalidSchemaKind { kind: kind.into() }
    }
}
