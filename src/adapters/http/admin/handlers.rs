//! HTTP handlers for admin panel endpoints.
//!
//! All handlers require an authenticated admin via `RequireAdmin`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAdmin;
use crate::application::handlers::admin::{
    AddEmailCommand, DeleteInterpretationCommand, EditInterpretationsHandler,
    ManageEmailsHandler, RemoveEmailCommand, UpsertInterpretationCommand,
};
use crate::domain::map::MapVariant;

use super::dto::{
    AddEmailRequest, AdminCommandResponse, DeleteInterpretationRequest, EmailEntryResponse,
    InterpretationResponse, RemoveEmailRequest, UpsertInterpretationRequest,
};

/// Handler state for admin endpoints.
#[derive(Clone)]
pub struct AdminHandlers {
    emails_handler: Arc<ManageEmailsHandler>,
    interpretations_handler: Arc<EditInterpretationsHandler>,
}

impl AdminHandlers {
    pub fn new(
        emails_handler: Arc<ManageEmailsHandler>,
        interpretations_handler: Arc<EditInterpretationsHandler>,
    ) -> Self {
        Self {
            emails_handler,
            interpretations_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Allow-list endpoints
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/emails - List authorized emails
pub async fn list_emails(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_admin): RequireAdmin,
) -> Response {
    match handlers.emails_handler.list().await {
        Ok(entries) => {
            let response: Vec<EmailEntryResponse> =
                entries.into_iter().map(EmailEntryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/admin/emails - Authorize an email
pub async fn add_email(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_admin): RequireAdmin,
    Json(req): Json<AddEmailRequest>,
) -> Response {
    let cmd = AddEmailCommand {
        email: req.email,
        is_admin: req.is_admin,
    };

    match handlers.emails_handler.add(cmd).await {
        Ok(entry) => {
            let response: EmailEntryResponse = entry.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/admin/emails - Revoke an email
pub async fn remove_email(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_admin): RequireAdmin,
    Json(req): Json<RemoveEmailRequest>,
) -> Response {
    let cmd = RemoveEmailCommand { email: req.email };

    match handlers.emails_handler.remove(cmd).await {
        Ok(()) => {
            let response = AdminCommandResponse {
                message: "Email revoked".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Interpretation endpoints
// ════════════════════════════════════════════════════════════════════════════

/// PUT /api/admin/interpretations - Store or replace a text
pub async fn upsert_interpretation(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_admin): RequireAdmin,
    Json(req): Json<UpsertInterpretationRequest>,
) -> Response {
    let cmd = UpsertInterpretationCommand {
        variant: req.variant,
        category: req.category,
        number: req.number,
        text: req.text,
    };

    match handlers.interpretations_handler.upsert(cmd).await {
        Ok(entry) => {
            let response: InterpretationResponse = entry.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/admin/interpretations/{variant} - List overrides for a variant
pub async fn list_interpretations(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_admin): RequireAdmin,
    Path(variant): Path<MapVariant>,
) -> Response {
    match handlers.interpretations_handler.list(variant).await {
        Ok(entries) => {
            let response: Vec<InterpretationResponse> = entries
                .into_iter()
                .map(InterpretationResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/admin/interpretations - Remove an override
pub async fn delete_interpretation(
    State(handlers): State<AdminHandlers>,
    RequireAdmin(_admin): RequireAdmin,
    Json(req): Json<DeleteInterpretationRequest>,
) -> Response {
    let cmd = DeleteInterpretationCommand {
        variant: req.variant,
        category: req.category,
        number: req.number,
    };

    match handlers.interpretations_handler.delete(cmd).await {
        Ok(()) => {
            let response = AdminCommandResponse {
                message: "Interpretation restored to default".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
