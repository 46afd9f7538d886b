//! HTTP handlers for webhook endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::webhook::{
    ProcessOrderEventHandler, WebhookOutcome, WebhookProcessingError,
};
use crate::domain::orders::{WebhookError, SIGNATURE_HEADER};

use super::dto::WebhookAckResponse;

/// Handler state for webhook endpoints.
#[derive(Clone)]
pub struct WebhookHandlers {
    order_handler: Arc<ProcessOrderEventHandler>,
}

impl WebhookHandlers {
    pub fn new(order_handler: Arc<ProcessOrderEventHandler>) -> Self {
        Self { order_handler }
    }
}

/// POST /api/webhooks/yampi - Receive a Yampi order event
///
/// The raw body is verified against the signature header before any
/// parsing, so this handler takes `Bytes` rather than a typed JSON
/// extractor.
pub async fn yampi_webhook(
    State(handlers): State<WebhookHandlers>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    match handlers.order_handler.handle(&body, signature).await {
        Ok(outcome) => {
            let status = match &outcome {
                WebhookOutcome::Granted { .. } => "granted",
                WebhookOutcome::Revoked { .. } => "revoked",
                WebhookOutcome::Ignored => "ignored",
            };
            (
                StatusCode::OK,
                Json(WebhookAckResponse {
                    received: true,
                    status: status.to_string(),
                }),
            )
                .into_response()
        }
        Err(WebhookProcessingError::Verification(e)) => {
            let status = match e {
                WebhookError::InvalidSignature => StatusCode::UNAUTHORIZED,
                WebhookError::MissingSignature | WebhookError::ParseError(_) => {
                    StatusCode::BAD_REQUEST
                }
            };
            tracing::warn!("webhook rejected: {}", e);
            (
                status,
                Json(ErrorResponse::new("WEBHOOK_REJECTED", e.to_string())),
            )
                .into_response()
        }
        Err(WebhookProcessingError::Store(e)) => domain_error_response(e),
    }
}
