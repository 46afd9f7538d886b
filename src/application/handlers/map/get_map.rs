//! GetMap - Query handler for fetching one stored map.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, MapId};
use crate::domain::map::KarmicMap;
use crate::ports::{InterpretationRepository, MapRepository};

use super::readings::{resolve_readings, Reading};

/// Query for one map by id.
#[derive(Debug, Clone)]
pub struct GetMapQuery {
    pub map_id: MapId,
    pub requester: AuthenticatedUser,
}

/// A stored map with its readings resolved.
#[derive(Debug, Clone)]
pub struct MapView {
    pub map: KarmicMap,
    pub readings: Vec<Reading>,
}

/// Handler for fetching maps.
pub struct GetMapHandler {
    maps: Arc<dyn MapRepository>,
    interpretations: Arc<dyn InterpretationRepository>,
}

impl GetMapHandler {
    pub fn new(
        maps: Arc<dyn MapRepository>,
        interpretations: Arc<dyn InterpretationRepository>,
    ) -> Self {
        Self {
            maps,
            interpretations,
        }
    }

    pub async fn handle(&self, query: GetMapQuery) -> Result<MapView, DomainError> {
        let map = self
            .maps
            .find_by_id(query.map_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::MapNotFound, "Map not found"))?;

        // Owners see their own maps; admins may inspect any map.
        if !map.is_owned_by(&query.requester.email) && !query.requester.is_admin {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Map belongs to another user",
            ));
        }

        let readings =
            resolve_readings(&self.interpretations, map.variant(), map.numbers()).await?;

        Ok(MapView { map, readings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{MockInterpretationRepo, MockMapRepo};
    use crate::domain::foundation::EmailAddress;
    use crate::domain::map::MapVariant;
    use crate::domain::numerology::BirthDate;

    fn owner() -> EmailAddress {
        EmailAddress::new("maria@example.com").unwrap()
    }

    fn stored_map() -> KarmicMap {
        let date = BirthDate::parse("15/07/1985").unwrap();
        KarmicMap::generate(owner(), date, MapVariant::Personal)
    }

    fn handler(maps: Arc<MockMapRepo>) -> GetMapHandler {
        GetMapHandler::new(maps, Arc::new(MockInterpretationRepo::new()))
    }

    #[tokio::test]
    async fn owner_fetches_own_map_with_readings() {
        let map = stored_map();
        let maps = Arc::new(MockMapRepo::new().with_map(map.clone()));

        let view = handler(maps)
            .handle(GetMapQuery {
                map_id: map.id(),
                requester: AuthenticatedUser::new(owner(), false),
            })
            .await
            .unwrap();

        assert_eq!(view.map.id(), map.id());
        assert_eq!(view.readings.len(), 4);
    }

    #[tokio::test]
    async fn other_user_is_forbidden() {
        let map = stored_map();
        let maps = Arc::new(MockMapRepo::new().with_map(map.clone()));

        let other = EmailAddress::new("joao@example.com").unwrap();
        let result = handler(maps)
            .handle(GetMapQuery {
                map_id: map.id(),
                requester: AuthenticatedUser::new(other, false),
            })
            .await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn admin_may_fetch_any_map() {
        let map = stored_map();
        let maps = Arc::new(MockMapRepo::new().with_map(map.clone()));

        let admin = EmailAddress::new("admin@matrizcarmica.com").unwrap();
        let result = handler(maps)
            .handle(GetMapQuery {
                map_id: map.id(),
                requester: AuthenticatedUser::new(admin, true),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_map_is_not_found() {
        let maps = Arc::new(MockMapRepo::new());

        let result = handler(maps)
            .handle(GetMapQuery {
                map_id: MapId::new(),
                requester: AuthenticatedUser::new(owner(), false),
            })
            .await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::MapNotFound);
    }
}
