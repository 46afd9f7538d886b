//! Login - Command handler for email allow-list login.

use std::sync::Arc;

use crate::domain::foundation::{
    AuthenticatedUser, DomainError, EmailAddress, ErrorCode,
};
use crate::ports::{AllowedEmailRepository, IssuedToken, SessionIssuer};

/// Command to log in with an email address.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub user: AuthenticatedUser,
}

/// Handler for email logins.
///
/// There is no password step: presence in the allow-list IS the
/// credential, exactly as the storefront sells access.
pub struct LoginHandler {
    emails: Arc<dyn AllowedEmailRepository>,
    issuer: Arc<dyn SessionIssuer>,
}

impl LoginHandler {
    pub fn new(emails: Arc<dyn AllowedEmailRepository>, issuer: Arc<dyn SessionIssuer>) -> Self {
        Self { emails, issuer }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        let email = EmailAddress::new(&cmd.email)?;

        let entry = self.emails.find(&email).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::EmailNotAuthorized, "Email not authorized")
        })?;

        let user = AuthenticatedUser::new(email, entry.is_admin());

        let token = self
            .issuer
            .issue(&user)
            .await
            .map_err(|e| DomainError::internal(e.to_string()))?;

        tracing::info!(email = %user.email, "user logged in");

        Ok(LoginResult { token, user })
    }
}
