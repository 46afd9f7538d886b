//! Authentication middleware and extractors for axum.
//!
//! The middleware validates Bearer tokens through the `SessionValidator`
//! port and injects `AuthenticatedUser` into request extensions. Handlers
//! opt in to enforcement with the `RequireAuth` and `RequireAdmin`
//! extractors.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth / RequireAdmin
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Authentication middleware that validates Bearer tokens.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the `SessionValidator` port
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. On missing token, continues without injecting (extractors reject)
/// 5. On invalid token, returns 401 Unauthorized
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match validator.validate(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => {
                let (status, message) = match &e {
                    AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
                    AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
                    AuthError::EmailNotAuthorized => {
                        (StatusCode::UNAUTHORIZED, "Email not authorized")
                    }
                    AuthError::ServiceUnavailable(msg) => {
                        tracing::error!("Auth service unavailable: {}", msg);
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Authentication service unavailable",
                        )
                    }
                };

                (
                    status,
                    Json(serde_json::json!({
                        "error": message,
                        "code": "AUTH_ERROR"
                    })),
                )
                    .into_response()
            }
        },
        None => {
            // No token provided - continue without auth.
            // Handlers use RequireAuth to enforce authentication.
            next.run(request).await
        }
    }
}

/// Extractor that requires authentication.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor that requires an authenticated admin.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthRejection::Unauthenticated)?;

        if !user.is_admin {
            return Err(AuthRejection::NotAdmin);
        }

        Ok(RequireAdmin(user))
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
    /// The user is authenticated but not an admin.
    NotAdmin,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentication required",
                "UNAUTHENTICATED",
            ),
            AuthRejection::NotAdmin => {
                (StatusCode::FORBIDDEN, "Admin access required", "FORBIDDEN")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": code
            })),
        )
            .into_response()
    }
}
