//! AllowedEmailRepository port for allow-list persistence.

use async_trait::async_trait;

use crate::domain::access::AllowedEmail;
use crate::domain::foundation::{DomainError, EmailAddress};

/// Repository for the email allow-list.
///
/// The allow-list is the entire user store: authentication, webhook
/// grants and the admin panel all go through this port.
#[async_trait]
pub trait AllowedEmailRepository: Send + Sync {
    /// Insert or update an entry. Upserting an existing email is a no-op
    /// apart from refreshing the admin flag and source, which keeps
    /// webhook retries idempotent.
    async fn upsert(&self, entry: &AllowedEmail) -> Result<(), DomainError>;

    /// Remove an entry. Returns false if the email was not listed.
    async fn remove(&self, email: &EmailAddress) -> Result<bool, DomainError>;

    /// Find an entry by email.
    async fn find(&self, email: &EmailAddress) -> Result<Option<AllowedEmail>, DomainError>;

    /// List all entries, ordered by authorization time.
    async fn list(&self) -> Result<Vec<AllowedEmail>, DomainError>;

    /// Check whether an email is authorized.
    async fn is_allowed(&self, email: &EmailAddress) -> Result<bool, DomainError> {
        Ok(self.find(email).await?.is_some())
    }
}
