//! Shared HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found", resource))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// Maps a domain error to an HTTP response.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::MapNotFound | ErrorCode::EmailNotFound | ErrorCode::InterpretationNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::Unauthorized | ErrorCode::EmailNotAuthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Do not leak infrastructure details to clients.
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %error.code(), "internal error: {}", error.message());
        "An unexpected error occurred".to_string()
    } else {
        error.message().to_string()
    };

    (
        status,
        Json(ErrorResponse::new(error.code().to_string(), message)),
    )
        .into_response()
}
