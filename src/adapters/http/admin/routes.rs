//! HTTP routes for admin panel endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_email, delete_interpretation, list_emails, list_interpretations, remove_email,
    upsert_interpretation, AdminHandlers,
};

/// Creates the admin router with all endpoints.
pub fn admin_routes(handlers: AdminHandlers) -> Router {
    Router::new()
        .route("/emails", get(list_emails))
        .route("/emails", post(add_email))
        .route("/emails", delete(remove_email))
        .route("/interpretations", put(upsert_interpretation))
        .route("/interpretations", delete(delete_interpretation))
        .route("/interpretations/:variant", get(list_interpretations))
        .with_state(handlers)
}
