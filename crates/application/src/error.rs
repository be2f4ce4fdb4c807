//! Application-level errors

use thiserror::Error;

/// Errors surfaced by application services
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain invariant violated
    #[error("Domain error: {0}")]
    Domain(#[from] domain::DomainError),

    /// The request carried no usable text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Speech synthesis failed after the reply was produced
    #[error("Synthesis error: {0}")]
    Synthesis(String),

    /// A dependency outside the process failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}
