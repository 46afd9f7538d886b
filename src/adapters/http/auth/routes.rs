//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, AuthHandlers};

/// Creates the auth router.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .with_state(handlers)
}
