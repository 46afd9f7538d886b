//! HTTP routes for map endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{generate_map, get_map, list_maps, MapHandlers};

/// Creates the map router with all endpoints.
pub fn map_routes(handlers: MapHandlers) -> Router {
    Router::new()
        .route("/", post(generate_map))
        .route("/", get(list_maps))
        .route("/:id", get(get_map))
        .with_state(handlers)
}
