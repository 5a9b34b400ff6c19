use crate::{
    path::Path,
    value::{NumericLiteral, Value, ValueKind},
};
use thiserror::Error as ThisError;

///
/// NumericFailure
///
/// Why a deferred numeric literal could not be stored in a field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum NumericFailure {
    #[error("not a base-10 number of that kind")]
    Unparsable,

    #[error("out of range for the field width")]
    Overflow,

    #[error("field kind does not accept numeric literals")]
    UnsupportedKind,
}

///
/// CoerceError
///
/// Leaf-level assignment failure, without path context.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum CoerceError {
    #[error("field is not writable")]
    NotWritable,

    #[error("cannot assign {actual} to a {expected} field")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("numeric literal {literal} as {target}: {reason}")]
    NumericConversion {
        literal: NumericLiteral,
        target: ValueKind,
        reason: NumericFailure,
    },

    #[error("{expected} field does not accept {value:?}")]
    ValueNotAccepted { expected: ValueKind, value: Value },
}

///
/// PatchErrorKind
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum PatchErrorKind {
    #[error("path does not resolve to a field")]
    PathNotResolved,

    #[error("field {field} is not writable")]
    FieldNotWritable { field: String },

    #[error("field {field}: cannot assign {actual} to {expected}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("field {field}: numeric literal {literal} as {target}: {reason}")]
    NumericConversion {
        field: String,
        literal: NumericLiteral,
        target: ValueKind,
        reason: NumericFailure,
    },

    #[error("field {field}: {expected} field does not accept {value:?}")]
    ValueNotAccepted {
        field: String,
        expected: ValueKind,
        value: Value,
    },
}

impl PatchErrorKind {
    /// Attach the located field name to a leaf-level failure.
    #[must_use]
    pub fn from_coerce(field: impl Into<String>, err: CoerceError) -> Self {
        let field = field.into();

        match err {
            CoerceError::NotWritable => Self::FieldNotWritable { field },
            CoerceError::TypeMismatch { expected, actual } => Self::TypeMismatch {
                field,
                expected,
                actual,
            },
            CoerceError::NumericConversion {
                literal,
                target,
                reason,
            } => Self::NumericConversion {
                field,
                literal,
                target,
                reason,
            },
            CoerceError::ValueNotAccepted { expected, value } => Self::ValueNotAccepted {
                field,
                expected,
                value,
            },
        }
    }

    /// Field the failure is about, when one was located.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::PathNotResolved => None,
            Self::FieldNotWritable { field }
            | Self::TypeMismatch { field, .. }
            | Self::NumericConversion { field, .. }
            | Self::ValueNotAccepted { field, .. } => Some(field.as_str()),
        }
    }
}

///
/// PatchError
///
/// First failure of a patch application, tagged with the path exactly as
/// the caller wrote it.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("patch {path}: {kind}")]
pub struct PatchError {
    path: Path,
    kind: PatchErrorKind,
}

impl PatchError {
    #[must_use]
    pub const fn new(path: Path, kind: PatchErrorKind) -> Self {
        Self { path, kind }
    }

    #[must_use]
    pub const fn path_not_resolved(path: Path) -> Self {
        Self::new(path, PatchErrorKind::PathNotResolved)
    }

    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> &PatchErrorKind {
        &self.kind
    }

    /// Field the failure is about, when one was located.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.kind.field()
    }

    #[must_use]
    pub fn into_kind(self) -> PatchErrorKind {
        self.kind
    }
}

///
/// TESTS
///
