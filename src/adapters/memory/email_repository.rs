//! In-memory allow-list repository.
//!
//! Useful for testing and development; production uses the Postgres
//! adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::access::AllowedEmail;
use crate::domain::foundation::{DomainError, EmailAddress};
use crate::ports::AllowedEmailRepository;

/// In-memory storage for allowed emails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmailRepository {
    entries: Arc<RwLock<HashMap<String, AllowedEmail>>>,
}

impl InMemoryEmailRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored entries.
    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl AllowedEmailRepository for InMemoryEmailRepository {
    async fn upsert(&self, entry: &AllowedEmail) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.email().as_str().to_string(), entry.clone());
        Ok(())
    }

    async fn remove(&self, email: &EmailAddress) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(email.as_str()).is_some())
    }

    async fn find(&self, email: &EmailAddress) -> Result<Option<AllowedEmail>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(email.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<AllowedEmail>, DomainError> {
        let entries = self.entries.read().await;
        let mut all: Vec<AllowedEmail> = entries.values().cloned().collect();
        all.sort_by_key(|e| e.authorized_at());
        Ok(all)
    }
}
