//! Domain-level errors

use thiserror::Error;

/// Errors raised by domain types
#[derive(Debug, Error)]
pub enum DomainError {
    /// A text field that must carry content was empty or whitespace-only
    #[error("Empty text: {0}")]
    EmptyText(String),

    /// A value failed validation
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Field that failed validation
        field: String,
        /// Why it was rejected
        reason: String,
    },
}

impl DomainError {
    /// Convenience constructor for validation failures
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
