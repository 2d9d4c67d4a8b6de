//! Property modifier states.
//!
//! Every decision about how `Optional` and `Readonly` wrappers combine is made
//! by the tables in this module. Constructors and transforms only ask a
//! schema for its [`WrapState`], move it through a table, and rewrap.

use crate::schema::{Options, Schema, SchemaKind};

/// Modifier status of a property schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapState {
    Unwrapped,
    Optional,
    Readonly,
    ReadonlyOptional,
}

impl WrapState {
    pub const ALL: [WrapState; 4] = [
        WrapState::Unwrapped,
        WrapState::Optional,
        WrapState::Readonly,
        WrapState::ReadonlyOptional,
    ];

    /// Reads the wrap state of a schema.
    pub fn of(schema: &Schema) -> Self {
        match schema.kind {
            SchemaKind::Optional(_) => Self::Optional,
            SchemaKind::Readonly(_) => Self::Readonly,
            SchemaKind::ReadonlyOptional(_) => Self::ReadonlyOptional,
            _ => Self::Unwrapped,
        }
    }

    pub fn make_optional(self) -> Self {
        match self {
            Self::Unwrapped => Self::Optional,
            Self::Readonly => Self::ReadonlyOptional,
            Self::Optional => Self::Optional,
            Self::ReadonlyOptional => Self::ReadonlyOptional,
        }
    }

    pub fn make_readonly(self) -> Self {
        match self {
            Self::Unwrapped => Self::Readonly,
            Self::Optional => Self::ReadonlyOptional,
            Self::Readonly => Self::Readonly,
            Self::ReadonlyOptional => Self::ReadonlyOptional,
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Self::Optional | Self::ReadonlyOptional)
    }

    pub fn is_readonly(self) -> bool {
        matches!(self, Self::Readonly | Self::ReadonlyOptional)
    }

    /// Wraps `inner` in this state. A modifier already on `inner` is replaced,
    /// never nested, so the result always reports `self` from [`WrapState::of`].
    pub fn wrap(self, inner: Schema) -> Schema {
        let inner = strip(inner);
        let kind = match self {
            Self::Unwrapped => return inner,
            Self::Optional => SchemaKind::Optional(Box::new(inner)),
            Self::Readonly => SchemaKind::Readonly(Box::new(inner)),
            Self::ReadonlyOptional => SchemaKind::ReadonlyOptional(Box::new(inner)),
        };
        Schema::from_parts(kind, Options::new())
    }
}

/// Removes the outermost modifier wrapper, if any.
pub(crate) fn strip(schema: Schema) -> Schema {
    match schema.kind {
        SchemaKind::Optional(inner)
        | SchemaKind::Readonly(inner)
        | SchemaKind::ReadonlyOptional(inner) => *inner,
        kind => Schema::from_parts(kind, schema.options),
    }
}
