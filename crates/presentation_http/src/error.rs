//! API error handling
//!
//! Client-facing messages are fixed Spanish strings; the underlying detail
//! is logged server-side and never leaks into a response body.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request carried no usable text
    #[error("Invalid input")]
    InvalidInput,

    /// The kill switch is off
    #[error("Service disabled")]
    ServiceDisabled,

    /// Anything unexpected; detail is logged, not returned
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidInput => (StatusCode::BAD_REQUEST, "No se recibió texto válido"),
            Self::ServiceDisabled => {
                (StatusCode::SERVICE_UNAVAILABLE, "Servicio desactivado temporalmente")
            }
            Self::Internal(detail) => {
                error!(detail = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno")
            }
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(_) => Self::InvalidInput,
            ApplicationError::Domain(e) => Self::Internal(e.to_string()),
            ApplicationError::Synthesis(msg)
            | ApplicationError::ExternalService(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
