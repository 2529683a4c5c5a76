// File: src/error.rs
// Purpose: Typed errors for field registration

use thiserror::Error;

/// Errors raised when registering a field with a form scope
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("field id must not be empty")]
    EmptyFieldId,

    #[error("field '{0}' is already registered")]
    DuplicateField(String),
}
