//! Interpretation text administration.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::interpretation::{InterpretationKey, InterpretationText};
use crate::domain::map::MapVariant;
use crate::domain::numerology::{is_master_number, KarmicCategory};
use crate::ports::InterpretationRepository;

/// Command to store or replace an interpretation text.
#[derive(Debug, Clone)]
pub struct UpsertInterpretationCommand {
    pub variant: MapVariant,
    pub category: KarmicCategory,
    pub number: i32,
    pub text: String,
}

/// Command to delete a stored override.
#[derive(Debug, Clone)]
pub struct DeleteInterpretationCommand {
    pub variant: MapVariant,
    pub category: KarmicCategory,
    pub number: i32,
}

/// Handler for editing interpretation overrides.
pub struct EditInterpretationsHandler {
    interpretations: Arc<dyn InterpretationRepository>,
}

impl EditInterpretationsHandler {
    pub fn new(interpretations: Arc<dyn InterpretationRepository>) -> Self {
        Self { interpretations }
    }

    /// Stores a text for a key, replacing any previous override.
    pub async fn upsert(
        &self,
        cmd: UpsertInterpretationCommand,
    ) -> Result<InterpretationText, DomainError> {
        validate_number(cmd.number)?;

        let key = InterpretationKey::new(cmd.variant, cmd.category, cmd.number);
        let entry = InterpretationText::new(key, cmd.text)?;

        self.interpretations.upsert(&entry).await?;

        tracing::info!(key = %entry.key(), "interpretation text updated");

        Ok(entry)
    }

    /// Deletes an override, restoring the built-in text.
    pub async fn delete(&self, cmd: DeleteInterpretationCommand) -> Result<(), DomainError> {
        validate_number(cmd.number)?;

        let key = InterpretationKey::new(cmd.variant, cmd.category, cmd.number);

        let deleted = self.interpretations.delete(key).await?;
        if !deleted {
            return Err(DomainError::new(
                ErrorCode::InterpretationNotFound,
                "No stored text for this key",
            ));
        }

        Ok(())
    }

    /// Lists every override stored for a variant.
    pub async fn list(&self, variant: MapVariant) -> Result<Vec<InterpretationText>, DomainError> {
        self.interpretations.list_by_variant(variant).await
    }
}

/// Accepts only numbers the calculator can actually produce.
fn validate_number(number: i32) -> Result<(), DomainError> {
    if (0..=9).contains(&number) || is_master_number(number) {
        return Ok(());
    }
    Err(DomainError::validation(
        "number",
        "Number must be 0-9 or a master number (11, 22, 33, 44)",
    ))
}
