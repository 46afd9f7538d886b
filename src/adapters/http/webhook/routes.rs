//! HTTP routes for webhook endpoints.

use axum::{routing::post, Router};

use super::handlers::{yampi_webhook, WebhookHandlers};

/// Creates the webhook router.
pub fn webhook_routes(handlers: WebhookHandlers) -> Router {
    Router::new()
        .route("/yampi", post(yampi_webhook))
        .with_state(handlers)
}
