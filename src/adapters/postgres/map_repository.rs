//! PostgreSQL implementation of MapRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, MapId, Timestamp};
use crate::domain::map::{KarmicMap, MapVariant};
use crate::domain::numerology::{BirthDate, KarmicNumberSet};
use crate::ports::MapRepository;

/// PostgreSQL implementation of the MapRepository port.
pub struct PostgresMapRepository {
    pool: PgPool,
}

impl PostgresMapRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a karmic map.
#[derive(Debug, sqlx::FromRow)]
struct KarmicMapRow {
    id: Uuid,
    owner_email: String,
    birth_date: String,
    spiritual_mark: i32,
    destiny_call: i32,
    karma_portal: i32,
    karmic_inheritance: i32,
    variant: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<KarmicMapRow> for KarmicMap {
    type Error = DomainError;

    fn try_from(row: KarmicMapRow) -> Result<Self, Self::Error> {
        let owner = EmailAddress::new(&row.owner_email).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid owner: {}", e))
        })?;

        let birth_date = BirthDate::parse(&row.birth_date).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid birth date: {}", e),
            )
        })?;

        let variant = MapVariant::from_str(&row.variant).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid variant: {}", e))
        })?;

        let numbers = KarmicNumberSet {
            spiritual_mark: row.spiritual_mark,
            destiny_call: row.destiny_call,
            karma_portal: row.karma_portal,
            karmic_inheritance: row.karmic_inheritance,
        };

        Ok(KarmicMap::from_parts(
            MapId::from_uuid(row.id),
            owner,
            birth_date,
            numbers,
            variant,
            Timestamp::from_datetime(row.created_at),
        ))
    }
}

#[async_trait]
impl MapRepository for PostgresMapRepository {
    async fn save(&self, map: &KarmicMap) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO karmic_maps (
                id, owner_email, birth_date, spiritual_mark, destiny_call,
                karma_portal, karmic_inheritance, variant, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(map.id().as_uuid())
        .bind(map.owner().as_str())
        .bind(map.birth_date().to_string())
        .bind(map.numbers().spiritual_mark)
        .bind(map.numbers().destiny_call)
        .bind(map.numbers().karma_portal)
        .bind(map.numbers().karmic_inheritance)
        .bind(map.variant().as_str())
        .bind(map.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save karmic map: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: MapId) -> Result<Option<KarmicMap>, DomainError> {
        let row: Option<KarmicMapRow> = sqlx::query_as(
            r#"
            SELECT id, owner_email, birth_date, spiritual_mark, destiny_call,
                   karma_portal, karmic_inheritance, variant, created_at
            FROM karmic_maps
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find karmic map: {}", e),
            )
        })?;

        row.map(KarmicMap::try_from).transpose()
    }

    async fn list_by_owner(&self, owner: &EmailAddress) -> Result<Vec<KarmicMap>, DomainError> {
        let rows: Vec<KarmicMapRow> = sqlx::query_as(
            r#"
            SELECT id, owner_email, birth_date, spiritual_mark, destiny_call,
                   karma_portal, karmic_inheritance, variant, created_at
            FROM karmic_maps
            WHERE owner_email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list karmic maps: {}", e),
            )
        })?;

        rows.into_iter().map(KarmicMap::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> KarmicMapRow {
        KarmicMapRow {
            id: Uuid::new_v4(),
            owner_email: "maria@example.com".to_string(),
            birth_date: "15/07/1985".to_string(),
            spiritual_mark: 3,
            destiny_call: 9,
            karma_portal: 4,
            karmic_inheritance: 9,
            variant: "personal".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn row_conversion_rehydrates_map() {
        let row = sample_row();
        let id = row.id;

        let map = KarmicMap::try_from(row).unwrap();

        assert_eq!(map.id().as_uuid(), &id);
        assert_eq!(map.birth_date().to_string(), "15/07/1985");
        assert_eq!(map.numbers().karma_portal, 4);
        assert_eq!(map.variant(), MapVariant::Personal);
    }

    #[test]
    fn row_conversion_rejects_bad_variant() {
        let mut row = sample_row();
        row.variant = "cosmic".to_string();

        let result = KarmicMap::try_from(row);
        assert_eq!(result.unwrap_err().code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn row_conversion_rejects_bad_birth_date() {
        let mut row = sample_row();
        row.birth_date = "1985-07-15".to_string();

        let result = KarmicMap::try_from(row);
        assert_eq!(result.unwrap_err().code(), ErrorCode::DatabaseError);
    }
}
