//! Authentication types for the domain layer.
//!
//! The application has no accounts or passwords: a user is authenticated
//! when their email appears in the allow-list. These types carry the
//! result of that check, populated by the `SessionValidator` port.

use thiserror::Error;

use super::EmailAddress;

/// Authenticated user extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The email address that identifies the user.
    pub email: EmailAddress,

    /// Whether the user may access the admin panel.
    pub is_admin: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(email: EmailAddress, is_admin: bool) -> Self {
        Self { email, is_admin }
    }
}

/// Authentication errors that can occur during session validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The email is not (or is no longer) in the allow-list.
    #[error("Email not authorized")]
    EmailNotAuthorized,

    /// The allow-list store is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::EmailNotAuthorized
        )
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
