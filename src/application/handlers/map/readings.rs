//! Reading assembly: numbers paired with interpretation texts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::interpretation::{catalog, InterpretationKey};
use crate::domain::map::MapVariant;
use crate::domain::numerology::{KarmicCategory, KarmicNumberSet};
use crate::ports::InterpretationRepository;

/// One karmic number with its resolved interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub category: KarmicCategory,
    pub number: i32,
    pub text: String,
}

/// Resolves the four readings for a number set under a variant.
///
/// Resolution order: stored override, built-in catalog, placeholder.
pub async fn resolve_readings(
    interpretations: &Arc<dyn InterpretationRepository>,
    variant: MapVariant,
    numbers: &KarmicNumberSet,
) -> Result<Vec<Reading>, DomainError> {
    let mut readings = Vec::with_capacity(KarmicCategory::ALL.len());

    for (category, number) in numbers.entries() {
        let key = InterpretationKey::new(variant, category, number);

        let text = match interpretations.find(key).await? {
            Some(entry) => entry.text().to_string(),
            None => catalog::default_text(number)
                .unwrap_or(catalog::MISSING_TEXT)
                .to_string(),
        };

        readings.push(Reading {
            category,
            number,
            text,
        });
    }

    Ok(readings)
}
