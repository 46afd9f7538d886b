//! InterpretationRepository port for editable interpretation texts.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::interpretation::{InterpretationKey, InterpretationText};
use crate::domain::map::MapVariant;

/// Repository for admin-edited interpretation overrides.
///
/// Lookups that miss here fall back to the built-in catalog, so an empty
/// store is a fully working configuration.
#[async_trait]
pub trait InterpretationRepository: Send + Sync {
    /// Insert or replace the text for a key.
    async fn upsert(&self, entry: &InterpretationText) -> Result<(), DomainError>;

    /// Find the stored override for a key.
    async fn find(&self, key: InterpretationKey)
        -> Result<Option<InterpretationText>, DomainError>;

    /// List all overrides for a variant.
    async fn list_by_variant(
        &self,
        variant: MapVariant,
    ) -> Result<Vec<InterpretationText>, DomainError>;

    /// Delete an override. Returns false if none was stored.
    async fn delete(&self, key: InterpretationKey) -> Result<bool, DomainError>;
}
