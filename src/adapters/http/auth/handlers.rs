//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::auth::{LoginCommand, LoginHandler};

use super::dto::{LoginRequest, LoginResponse};

/// Handler state for auth endpoints.
#[derive(Clone)]
pub struct AuthHandlers {
    login_handler: Arc<LoginHandler>,
}

impl AuthHandlers {
    pub fn new(login_handler: Arc<LoginHandler>) -> Self {
        Self { login_handler }
    }
}

/// POST /api/auth/login - Exchange an allow-listed email for a session token
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand { email: req.email };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => {
            let response: LoginResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
