//! The closed error taxonomy shared by schema construction and rendering.
//!
//! Every fallible operation in this crate returns [`DomainError`]. The enum is
//! deliberately closed: adding a variant forces every consumer match to be
//! revisited. Errors are plain values with structured fields so outer layers
//! (a request handler, a store) can map them to stable wire-level codes
//! instead of parsing display strings.

use serde::Serialize;

use crate::params::ValueKind;

/// Everything that can go wrong while building or rendering a template.
///
/// The first four variants arise at construction time, the last four at
/// render time; [`DomainError::class`] exposes that split. A single operation
/// yields at most one `DomainError` and never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum DomainError {
    /// A name (template name, choice key) is blank or otherwise invalid.
    #[error("invalid name for {what}: {reason}")]
    InvalidName { what: String, reason: String },

    /// A key that must be unique appeared more than once.
    #[error("duplicate key '{key}' in {context}")]
    DuplicateKey { key: String, context: String },

    /// A required value was not supplied at construction time.
    #[error("missing required value: {what}")]
    MissingRequired { what: String },

    /// A configurable's parameter name is blank.
    #[error("invalid parameter name: '{name}'")]
    InvalidParameterName { name: String },

    /// A parameter a configurable or placeholder needs is absent from the bag.
    #[error("parameter '{name}' not found in parameter bag")]
    MissingParameter { name: String },

    /// A parameter is present but has the wrong scalar kind.
    #[error("parameter '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A repetition count resolved to a negative number.
    #[error("negative repeat count: {count}")]
    RepeatError { count: i64 },

    /// A one-of selector matched none of the declared choices.
    #[error("no choice matches key '{key}'")]
    InvalidChoiceKey { key: String },
}

/// Coarse split of the taxonomy for outward-facing error mapping.
///
/// Construction errors are schema-author mistakes; render errors are
/// parameter-supplier mistakes. Outer layers typically map the former to one
/// client-error class and the latter to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorClass {
    Construction,
    Render,
}

impl DomainError {
    /// Whether this error arose while building a schema or while rendering it.
    pub fn class(&self) -> ErrorClass {
        match self {
            DomainError::InvalidName { .. }
            | DomainError::DuplicateKey { .. }
            | DomainError::MissingRequired { .. }
            | DomainError::InvalidParameterName { .. } => ErrorClass::Construction,
            DomainError::MissingParameter { .. }
            | DomainError::TypeMismatch { .. }
            | DomainError::RepeatError { .. }
            | DomainError::InvalidChoiceKey { .. } => ErrorClass::Render,
        }
    }

    /// Create an invalid-name error.
    pub fn invalid_name(what: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            what: what.into(),
            reason: reason.into(),
        }
    }

    /// Create a duplicate-key error.
    pub fn duplicate_key(key: impl Into<String>, context: impl Into<String>) -> Self {
        Self::DuplicateKey {
            key: key.into(),
            context: context.into(),
        }
    }

    /// Create a missing-parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create a type-mismatch error.
    pub fn type_mismatch(name: impl Into<String>, expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }
}
