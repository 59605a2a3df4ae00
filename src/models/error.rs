// src/models/error.rs
use thiserror::Error;

use crate::store::StoreError;

/// A product body or field value that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataValidationError {
    #[error("Invalid product: missing {0}")]
    MissingField(&'static str),

    #[error("Invalid type for {field}: expected {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Invalid attribute: unknown category '{0}'")]
    UnknownCategory(String),

    /// The body is not a JSON object at all.
    #[error("Invalid product: body of request contained bad or no data (found {0})")]
    Malformed(&'static str),
}

impl DataValidationError {
    pub(crate) fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        DataValidationError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),

    #[error("Update called with empty ID field")]
    EmptyId,

    #[error("Product with id '{0}' was not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
