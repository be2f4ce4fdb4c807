//! Completion client errors

use thiserror::Error;

/// Errors from the chat completion backend
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network-level failure reaching the endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The endpoint answered with a non-success status
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// The response body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The response parsed but carried no choices
    #[error("Empty completion from model")]
    EmptyCompletion,

    /// Configuration problem detected at startup
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if let Some(status) = err.status() {
            Self::ApiError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::InvalidResponse(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_includes_status() {
        let err = CompletionError::ApiError {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API error (429): rate limited");
    }

    #[test]
    fn empty_completion_message() {
        assert_eq!(
            CompletionError::EmptyCompletion.to_string(),
            "Empty completion from model"
        );
    }
}
