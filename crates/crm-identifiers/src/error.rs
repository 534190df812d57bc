//! Error types for crm-identifiers

use serde::Serialize;
use thiserror::Error;

/// Why a string could not be parsed as a SIRET or SIREN
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier is empty")]
    Empty,

    #[error("Invalid length: expected {expected} digits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("Non-digit character {character:?} at position {position}")]
    NonDigit { position: usize, character: char },

    #[error("Checksum mismatch")]
    Checksum,
}

/// A single rule violation on an organization form field
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is not a valid SIRET")]
    InvalidSiret { field: &'static str },
}

impl FieldError {
    /// Name of the form field the error is attached to
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required { field }
            | FieldError::TooShort { field, .. }
            | FieldError::TooLong { field, .. }
            | FieldError::InvalidSiret { field } => field,
        }
    }
}
