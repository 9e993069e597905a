// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use alloc::string::{String, ToString};

use thiserror::Error;

use crate::value::{Value, ValueKind};

/// Errors produced while resolving a path or coercing the value found there.
///
/// Every variant carries the context needed to explain the failure. Use
/// [`LookupError::kind`] to branch on the failure without inspecting fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// A mapping did not contain the requested key.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// An array index was negative or not smaller than the array's length.
    #[error("given index out of bounds: index '{index}' but length '{len}'")]
    IndexOutOfBounds { index: i64, len: usize },

    /// An array was reached but the path segment is not an integer.
    #[error("integer lookup required but string given: lookup was '{segment}'")]
    NonIntegerSliceAccess { segment: String },

    /// The path continues past a scalar or null node.
    #[error("reached end of nested structures before lookup complete: last key was '{segment}'")]
    EndOfNestedStructures { segment: String },

    /// The value found is not of the requested type.
    #[error("result type is unexpected: expected {expected} but found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: ValueKind,
    },

    /// The value found cannot be converted to the requested type without loss.
    #[error("unable to convert to required type: {found} value '{value}' cannot be converted to {target}")]
    UnableToConvert {
        value: String,
        found: ValueKind,
        target: &'static str,
    },
}

/// Discriminant of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyNotFound,
    IndexOutOfBounds,
    NonIntegerSliceAccess,
    EndOfNestedStructures,
    UnexpectedType,
    UnableToConvert,
}

pub type LookupResult<T> = core::result::Result<T, LookupError>;

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            LookupError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            LookupError::NonIntegerSliceAccess { .. } => ErrorKind::NonIntegerSliceAccess,
            LookupError::EndOfNestedStructures { .. } => ErrorKind::EndOfNestedStructures,
            LookupError::UnexpectedType { .. } => ErrorKind::UnexpectedType,
            LookupError::UnableToConvert { .. } => ErrorKind::UnableToConvert,
        }
    }

    pub(crate) fn unexpected_type(expected: &'static str, found: &Value) -> Self {
        LookupError::UnexpectedType {
            expected,
            found: found.kind(),
        }
    }

    pub(crate) fn unable_to_convert(value: &Value, target: &'static str) -> Self {
        LookupError::UnableToConvert {
            value: value.to_string(),
            found: value.kind(),
            target,
        }
    }
}
