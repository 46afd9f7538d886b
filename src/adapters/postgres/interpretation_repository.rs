//! PostgreSQL implementation of InterpretationRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::interpretation::{InterpretationKey, InterpretationText};
use crate::domain::map::MapVariant;
use crate::domain::numerology::KarmicCategory;
use crate::ports::InterpretationRepository;

/// PostgreSQL implementation of the InterpretationRepository port.
pub struct PostgresInterpretationRepository {
    pool: PgPool,
}

impl PostgresInterpretationRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an interpretation override.
#[derive(Debug, sqlx::FromRow)]
struct InterpretationRow {
    variant: String,
    category: String,
    number: i32,
    text: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InterpretationRow> for InterpretationText {
    type Error = DomainError;

    fn try_from(row: InterpretationRow) -> Result<Self, Self::Error> {
        let variant = MapVariant::from_str(&row.variant).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid variant: {}", e))
        })?;

        let category = KarmicCategory::from_str(&row.category).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid category: {}", e))
        })?;

        Ok(InterpretationText::from_parts(
            InterpretationKey::new(variant, category, row.number),
            row.text,
            Timestamp::from_datetime(row.updated_at),
        ))
    }
}

#[async_trait]
impl InterpretationRepository for PostgresInterpretationRepository {
    async fn upsert(&self, entry: &InterpretationText) -> Result<(), DomainError> {
        let key = entry.key();

        sqlx::query(
            r#"
            INSERT INTO interpretations (variant, category, number, text, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (variant, category, number) DO UPDATE SET
                text = EXCLUDED.text,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key.variant.as_str())
        .bind(key.category.as_str())
        .bind(key.number)
        .bind(entry.text())
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert interpretation: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find(
        &self,
        key: InterpretationKey,
    ) -> Result<Option<InterpretationText>, DomainError> {
        let row: Option<InterpretationRow> = sqlx::query_as(
            r#"
            SELECT variant, category, number, text, updated_at
            FROM interpretations
            WHERE variant = $1 AND category = $2 AND number = $3
            "#,
        )
        .bind(key.variant.as_str())
        .bind(key.category.as_str())
        .bind(key.number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find interpretation: {}", e),
            )
        })?;

        row.map(InterpretationText::try_from).transpose()
    }

    async fn list_by_variant(
        &self,
        variant: MapVariant,
    ) -> Result<Vec<InterpretationText>, DomainError> {
        let rows: Vec<InterpretationRow> = sqlx::query_as(
            r#"
            SELECT variant, category, number, text, updated_at
            FROM interpretations
            WHERE variant = $1
            ORDER BY category, number
            "#,
        )
        .bind(variant.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list interpretations: {}", e),
            )
        })?;

        rows.into_iter().map(InterpretationText::try_from).collect()
    }

    async fn delete(&self, key: InterpretationKey) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM interpretations
            WHERE variant = $1 AND category = $2 AND number = $3
            "#,
        )
        .bind(key.variant.as_str())
        .bind(key.category.as_str())
        .bind(key.number)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to delete interpretation: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_conversion_rehydrates_entry() {
        let row = InterpretationRow {
            variant: "love".to_string(),
            category: "karmaPortal".to_string(),
            number: 11,
            text: "O portal 11 no amor.".to_string(),
            updated_at: Utc::now(),
        };

        let entry = InterpretationText::try_from(row).unwrap();
        assert_eq!(entry.key().storage_key(), "love:karmaPortal-11");
        assert_eq!(entry.text(), "O portal 11 no amor.");
    }

    #[test]
    fn row_conversion_rejects_bad_category() {
        let row = InterpretationRow {
            variant: "love".to_string(),
            category: "lifePath".to_string(),
            number: 1,
            text: "x".to_string(),
            updated_at: Utc::now(),
        };

        let result = InterpretationText::try_from(row);
        assert_eq!(result.unwrap_err().code(), ErrorCode::DatabaseError);
    }
}
