//! In-memory interpretation override repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::interpretation::{InterpretationKey, InterpretationText};
use crate::domain::map::MapVariant;
use crate::ports::InterpretationRepository;

/// In-memory storage for interpretation overrides.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInterpretationRepository {
    entries: Arc<RwLock<HashMap<String, InterpretationText>>>,
}

impl InMemoryInterpretationRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored overrides.
    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl InterpretationRepository for InMemoryInterpretationRepository {
    async fn upsert(&self, entry: &InterpretationText) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.key().storage_key(), entry.clone());
        Ok(())
    }

    async fn find(
        &self,
        key: InterpretationKey,
    ) -> Result<Option<InterpretationText>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&key.storage_key()).cloned())
    }

    async fn list_by_variant(
        &self,
        variant: MapVariant,
    ) -> Result<Vec<InterpretationText>, DomainError> {
        let entries = self.entries.read().await;
        let mut matching: Vec<InterpretationText> = entries
            .values()
            .filter(|e| e.key().variant == variant)
            .cloned()
            .collect();
        matching.sort_by_key(|e| e.key().storage_key());
        Ok(matching)
    }

    async fn delete(&self, key: InterpretationKey) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&key.storage_key()).is_some())
    }
}
