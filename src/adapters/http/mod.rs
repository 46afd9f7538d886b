//! HTTP adapter: routers, handlers, DTOs and middleware.

pub mod admin;
pub mod auth;
pub mod error;
pub mod map;
pub mod middleware;
pub mod webhook;

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use admin::{admin_routes, AdminHandlers};
pub use auth::{auth_routes, AuthHandlers};
pub use map::{map_routes, MapHandlers};
pub use middleware::{auth_middleware, AuthState};
pub use webhook::{webhook_routes, WebhookHandlers};

/// Assembles the application router.
///
/// Map and admin routes sit behind the auth middleware; login and the
/// webhook endpoint are public (the webhook authenticates itself with
/// its signature).
pub fn build_router(
    auth_handlers: AuthHandlers,
    map_handlers: MapHandlers,
    admin_handlers: AdminHandlers,
    webhook_handlers: WebhookHandlers,
    validator: AuthState,
    config: &ServerConfig,
) -> Router {
    let protected = Router::new()
        .nest("/maps", map_routes(map_handlers))
        .nest("/admin", admin_routes(admin_handlers))
        .layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ));

    let api = Router::new()
        .nest("/auth", auth_routes(auth_handlers))
        .nest("/webhooks", webhook_routes(webhook_handlers))
        .merge(protected);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(config))
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        // Development default: accept any origin.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
