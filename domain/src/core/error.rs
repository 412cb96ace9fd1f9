//! Domain error types

use crate::question::value_objects::ChoiceId;
use thiserror::Error;

/// Result alias for fallible domain operations
pub type Result<T> = std::result::Result<T, DomainError>;

/// An input that violates a stated constraint.
///
/// Returned before any state change takes place, so the aggregate is left
/// exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} is too long: {actual} characters (max {max})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Too many selections: {submitted} submitted, at most {max} allowed")]
    TooManySelections { submitted: usize, max: usize },
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    #[error("No choice ids left to assign")]
    ChoiceIdsExhausted,
}

impl DomainError {
    /// Check if this error was caused by invalid input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Check if this error references a choice that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::ChoiceNotFound(_))
    }
}
