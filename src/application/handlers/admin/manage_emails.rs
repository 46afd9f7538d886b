//! Allow-list administration.

use std::sync::Arc;

use crate::domain::access::AllowedEmail;
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode};
use crate::ports::AllowedEmailRepository;

/// Command to authorize an email.
#[derive(Debug, Clone)]
pub struct AddEmailCommand {
    pub email: String,
    pub is_admin: bool,
}

/// Command to revoke an email.
#[derive(Debug, Clone)]
pub struct RemoveEmailCommand {
    pub email: String,
}

/// Handler for the admin email panel. Admin authorization is enforced at
/// the HTTP layer; this handler assumes the caller is entitled.
pub struct ManageEmailsHandler {
    emails: Arc<dyn AllowedEmailRepository>,
}

impl ManageEmailsHandler {
    pub fn new(emails: Arc<dyn AllowedEmailRepository>) -> Self {
        Self { emails }
    }

    /// Adds an email to the allow-list. Re-adding updates the admin flag.
    pub async fn add(&self, cmd: AddEmailCommand) -> Result<AllowedEmail, DomainError> {
        let email = EmailAddress::new(&cmd.email)?;
        let entry = AllowedEmail::manual(email, cmd.is_admin);

        self.emails.upsert(&entry).await?;

        tracing::info!(email = %entry.email(), is_admin = entry.is_admin(), "email authorized");

        Ok(entry)
    }

    /// Removes an email from the allow-list.
    pub async fn remove(&self, cmd: RemoveEmailCommand) -> Result<(), DomainError> {
        let email = EmailAddress::new(&cmd.email)?;

        let removed = self.emails.remove(&email).await?;
        if !removed {
            return Err(DomainError::new(
                ErrorCode::EmailNotFound,
                "Email is not in the allow-list",
            ));
        }

        tracing::info!(email = %email, "email revoked");

        Ok(())
    }

    /// Lists every authorized email.
    pub async fn list(&self) -> Result<Vec<AllowedEmail>, DomainError> {
        self.emails.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockEmailRepo;

    fn email(raw: &str) -> EmailAddress {
        EmailAddress::new(raw).unwrap()
    }

    #[tokio::test]
    async fn add_inserts_normalized_email() {
        let repo = Arc::new(MockEmailRepo::new());
        let handler = ManageEmailsHandler::new(repo.clone());

        let entry = handler
            .add(AddEmailCommand {
                email: " Maria@Example.com ".to_string(),
                is_admin: false,
            })
            .await
            .unwrap();

        assert_eq!(entry.email().as_str(), "maria@example.com");
        assert!(repo.contains(&email("maria@example.com")));
    }

    #[tokio::test]
    async fn add_rejects_malformed_email() {
        let handler = ManageEmailsHandler::new(Arc::new(MockEmailRepo::new()));

        let result = handler
            .add(AddEmailCommand {
                email: "not-an-email".to_string(),
                is_admin: false,
            })
            .await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn re_adding_updates_admin_flag() {
        let repo = Arc::new(MockEmailRepo::new());
        let handler = ManageEmailsHandler::new(repo.clone());

        handler
            .add(AddEmailCommand {
                email: "maria@example.com".to_string(),
                is_admin: false,
            })
            .await
            .unwrap();
        handler
            .add(AddEmailCommand {
                email: "maria@example.com".to_string(),
                is_admin: true,
            })
            .await
            .unwrap();

        assert_eq!(repo.count(), 1);
        let listed = handler.list().await.unwrap();
        assert!(listed[0].is_admin());
    }

    #[tokio::test]
    async fn remove_deletes_entry() {
        let repo = Arc::new(
            MockEmailRepo::new()
                .with_entry(AllowedEmail::manual(email("maria@example.com"), false)),
        );
        let handler = ManageEmailsHandler::new(repo.clone());

        handler
            .remove(RemoveEmailCommand {
                email: "maria@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn remove_unknown_email_is_not_found() {
        let handler = ManageEmailsHandler::new(Arc::new(MockEmailRepo::new()));

        let result = handler
            .remove(RemoveEmailCommand {
                email: "ghost@example.com".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::EmailNotFound);
    }
}
