//! HTTP DTOs for map endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::map::{GenerateMapResult, MapView, Reading};
use crate::domain::foundation::Timestamp;
use crate::domain::map::{KarmicMap, MapVariant};
use crate::domain::numerology::{KarmicCategory, KarmicNumberSet};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to generate a map.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMapRequest {
    /// Birth date in DD/MM/YYYY form.
    pub birth_date: String,
    /// Which reading to produce; defaults to the personal map.
    #[serde(default = "default_variant")]
    pub variant: MapVariant,
}

fn default_variant() -> MapVariant {
    MapVariant::Personal
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One karmic number with its interpretation.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingResponse {
    pub category: KarmicCategory,
    pub number: i32,
    pub text: String,
}

impl From<Reading> for ReadingResponse {
    fn from(reading: Reading) -> Self {
        Self {
            category: reading.category,
            number: reading.number,
            text: reading.text,
        }
    }
}

/// A full map with resolved readings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    pub id: String,
    pub birth_date: String,
    pub variant: MapVariant,
    pub numbers: KarmicNumberSet,
    pub readings: Vec<ReadingResponse>,
    pub created_at: Timestamp,
}

impl MapResponse {
    fn from_map_and_readings(map: KarmicMap, readings: Vec<Reading>) -> Self {
        Self {
            id: map.id().to_string(),
            birth_date: map.birth_date().to_string(),
            variant: map.variant(),
            numbers: *map.numbers(),
            readings: readings.into_iter().map(ReadingResponse::from).collect(),
            created_at: map.created_at(),
        }
    }
}

impl From<GenerateMapResult> for MapResponse {
    fn from(result: GenerateMapResult) -> Self {
        Self::from_map_and_readings(result.map, result.readings)
    }
}

impl From<MapView> for MapResponse {
    fn from(view: MapView) -> Self {
        Self::from_map_and_readings(view.map, view.readings)
    }
}

/// A map without readings, for list views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummaryResponse {
    pub id: String,
    pub birth_date: String,
    pub variant: MapVariant,
    pub numbers: KarmicNumberSet,
    pub created_at: Timestamp,
}

impl From<KarmicMap> for MapSummaryResponse {
    fn from(map: KarmicMap) -> Self {
        Self {
            id: map.id().to_string(),
            birth_date: map.birth_date().to_string(),
            variant: map.variant(),
            numbers: *map.numbers(),
            created_at: map.created_at(),
        }
    }
}
