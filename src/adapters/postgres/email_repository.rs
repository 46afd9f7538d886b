//! PostgreSQL implementation of AllowedEmailRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::access::{AccessSource, AllowedEmail};
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, Timestamp};
use crate::ports::AllowedEmailRepository;

/// PostgreSQL implementation of the AllowedEmailRepository port.
pub struct PostgresEmailRepository {
    pool: PgPool,
}

impl PostgresEmailRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an allow-list entry.
#[derive(Debug, sqlx::FromRow)]
struct AllowedEmailRow {
    email: String,
    is_admin: bool,
    source: String,
    authorized_at: DateTime<Utc>,
}

impl TryFrom<AllowedEmailRow> for AllowedEmail {
    type Error = DomainError;

    fn try_from(row: AllowedEmailRow) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(&row.email).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid email: {}", e))
        })?;

        Ok(AllowedEmail::from_parts(
            email,
            row.is_admin,
            parse_source(&row.source)?,
            Timestamp::from_datetime(row.authorized_at),
        ))
    }
}

fn parse_source(s: &str) -> Result<AccessSource, DomainError> {
    match s {
        "manual" => Ok(AccessSource::Manual),
        "purchase" => Ok(AccessSource::Purchase),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid source value: {}", s),
        )),
    }
}

#[async_trait]
impl AllowedEmailRepository for PostgresEmailRepository {
    async fn upsert(&self, entry: &AllowedEmail) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO allowed_emails (email, is_admin, source, authorized_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE SET
                is_admin = EXCLUDED.is_admin,
                source = EXCLUDED.source
            "#,
        )
        .bind(entry.email().as_str())
        .bind(entry.is_admin())
        .bind(entry.source().as_str())
        .bind(entry.authorized_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert allowed email: {}", e),
            )
        })?;

        Ok(())
    }

    async fn remove(&self, email: &EmailAddress) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM allowed_emails WHERE email = $1")
            .bind(email.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to remove allowed email: {}", e),
                )
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, email: &EmailAddress) -> Result<Option<AllowedEmail>, DomainError> {
        let row: Option<AllowedEmailRow> = sqlx::query_as(
            r#"
            SELECT email, is_admin, source, authorized_at
            FROM allowed_emails
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find allowed email: {}", e),
            )
        })?;

        row.map(AllowedEmail::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<AllowedEmail>, DomainError> {
        let rows: Vec<AllowedEmailRow> = sqlx::query_as(
            r#"
            SELECT email, is_admin, source, authorized_at
            FROM allowed_emails
            ORDER BY authorized_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list allowed emails: {}", e),
            )
        })?;

        rows.into_iter().map(AllowedEmail::try_from).collect()
    }
}
