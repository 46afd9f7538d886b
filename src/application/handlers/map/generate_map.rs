//! GenerateMap - Command handler for creating a karmic map.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress};
use crate::domain::map::{KarmicMap, MapVariant};
use crate::domain::numerology::BirthDate;
use crate::ports::{InterpretationRepository, MapRepository};

use super::readings::{resolve_readings, Reading};

/// Command to generate and persist a karmic map.
#[derive(Debug, Clone)]
pub struct GenerateMapCommand {
    pub owner: EmailAddress,
    pub birth_date_text: String,
    pub variant: MapVariant,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateMapResult {
    pub map: KarmicMap,
    pub readings: Vec<Reading>,
}

/// Handler for generating maps.
pub struct GenerateMapHandler {
    maps: Arc<dyn MapRepository>,
    interpretations: Arc<dyn InterpretationRepository>,
}

impl GenerateMapHandler {
    pub fn new(
        maps: Arc<dyn MapRepository>,
        interpretations: Arc<dyn InterpretationRepository>,
    ) -> Self {
        Self {
            maps,
            interpretations,
        }
    }

    pub async fn handle(&self, cmd: GenerateMapCommand) -> Result<GenerateMapResult, DomainError> {
        // 1. Validate the birth date at the boundary; the calculator only
        //    ever sees a valid date.
        let birth_date = BirthDate::parse(&cmd.birth_date_text)?;

        // 2. Derive the numbers and persist the map.
        let map = KarmicMap::generate(cmd.owner, birth_date, cmd.variant);
        self.maps.save(&map).await?;

        tracing::info!(
            map_id = %map.id(),
            variant = %map.variant(),
            "karmic map generated"
        );

        // 3. Resolve interpretation texts for the response.
        let readings =
            resolve_readings(&self.interpretations, cmd.variant, map.numbers()).await?;

        Ok(GenerateMapResult { map, readings })
    }
}
