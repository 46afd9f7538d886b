//! Mock session validator for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Validator that recognizes a fixed set of tokens.
#[derive(Debug, Clone, Default)]
pub struct MockSessionValidator {
    users: HashMap<String, AuthenticatedUser>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token as belonging to a user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.users
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
