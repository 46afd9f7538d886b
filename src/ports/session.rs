//! Session token ports.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Issues session tokens after a successful allow-list check.
#[async_trait]
pub trait SessionIssuer: Send + Sync {
    /// Issue a token for an authenticated user.
    async fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError>;
}

/// Validates bearer tokens on incoming requests.
///
/// Implementations re-check the allow-list so a revoked email loses
/// access before its token expires.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token and return the user it belongs to.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
