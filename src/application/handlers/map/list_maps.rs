//! ListMaps - Query handler for a user's stored maps.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress};
use crate::domain::map::KarmicMap;
use crate::ports::MapRepository;

/// Query for all maps owned by an email.
#[derive(Debug, Clone)]
pub struct ListMapsQuery {
    pub owner: EmailAddress,
}

/// Handler for listing maps.
pub struct ListMapsHandler {
    maps: Arc<dyn MapRepository>,
}

impl ListMapsHandler {
    pub fn new(maps: Arc<dyn MapRepository>) -> Self {
        Self { maps }
    }

    pub async fn handle(&self, query: ListMapsQuery) -> Result<Vec<KarmicMap>, DomainError> {
        self.maps.list_by_owner(&query.owner).await
    }
}
