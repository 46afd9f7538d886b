//! HTTP handlers for map endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::map::{
    GenerateMapCommand, GenerateMapHandler, GetMapHandler, GetMapQuery, ListMapsHandler,
    ListMapsQuery,
};
use crate::domain::foundation::MapId;

use super::dto::{GenerateMapRequest, MapResponse, MapSummaryResponse};

/// Handler state for map endpoints.
#[derive(Clone)]
pub struct MapHandlers {
    generate_handler: Arc<GenerateMapHandler>,
    get_handler: Arc<GetMapHandler>,
    list_handler: Arc<ListMapsHandler>,
}

impl MapHandlers {
    pub fn new(
        generate_handler: Arc<GenerateMapHandler>,
        get_handler: Arc<GetMapHandler>,
        list_handler: Arc<ListMapsHandler>,
    ) -> Self {
        Self {
            generate_handler,
            get_handler,
            list_handler,
        }
    }
}

/// POST /api/maps - Generate a karmic map from a birth date
pub async fn generate_map(
    State(handlers): State<MapHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<GenerateMapRequest>,
) -> Response {
    let cmd = GenerateMapCommand {
        owner: user.email,
        birth_date_text: req.birth_date,
        variant: req.variant,
    };

    match handlers.generate_handler.handle(cmd).await {
        Ok(result) => {
            let response: MapResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/maps - List the caller's maps
pub async fn list_maps(
    State(handlers): State<MapHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListMapsQuery { owner: user.email };

    match handlers.list_handler.handle(query).await {
        Ok(maps) => {
            let response: Vec<MapSummaryResponse> =
                maps.into_iter().map(MapSummaryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/maps/{id} - Fetch one map with its readings
pub async fn get_map(
    State(handlers): State<MapHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let map_id = match id.parse::<MapId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid map ID")),
            )
                .into_response()
        }
    };

    let query = GetMapQuery {
        map_id,
        requester: user,
    };

    match handlers.get_handler.handle(query).await {
        Ok(view) => {
            let response: MapResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
