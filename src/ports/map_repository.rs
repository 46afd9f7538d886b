//! MapRepository port for karmic map persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmailAddress, MapId};
use crate::domain::map::KarmicMap;

/// Repository for generated karmic maps.
#[async_trait]
pub trait MapRepository: Send + Sync {
    /// Persist a newly generated map.
    async fn save(&self, map: &KarmicMap) -> Result<(), DomainError>;

    /// Find a map by id.
    async fn find_by_id(&self, id: MapId) -> Result<Option<KarmicMap>, DomainError>;

    /// List all maps owned by an email, newest first.
    async fn list_by_owner(&self, owner: &EmailAddress) -> Result<Vec<KarmicMap>, DomainError>;
}
