//! In-memory karmic map repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EmailAddress, MapId};
use crate::domain::map::KarmicMap;
use crate::ports::MapRepository;

/// In-memory storage for karmic maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMapRepository {
    maps: Arc<RwLock<HashMap<MapId, KarmicMap>>>,
}

impl InMemoryMapRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored maps.
    pub async fn count(&self) -> usize {
        self.maps.read().await.len()
    }
}

#[async_trait]
impl MapRepository for InMemoryMapRepository {
    async fn save(&self, map: &KarmicMap) -> Result<(), DomainError> {
        let mut maps = self.maps.write().await;
        maps.insert(map.id(), map.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: MapId) -> Result<Option<KarmicMap>, DomainError> {
        let maps = self.maps.read().await;
        Ok(maps.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner: &EmailAddress) -> Result<Vec<KarmicMap>, DomainError> {
        let maps = self.maps.read().await;
        let mut owned: Vec<KarmicMap> = maps
            .values()
            .filter(|m| m.is_owned_by(owner))
            .cloned()
            .collect();
        // Newest first.
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(owned)
    }
}
