//! HTTP DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::auth::LoginResult;
use crate::domain::foundation::Timestamp;

/// Request to log in with an email.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Response carrying a session token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: Timestamp,
    pub email: String,
    pub is_admin: bool,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token.token,
            expires_at: result.token.expires_at,
            email: result.user.email.as_str().to_string(),
            is_admin: result.user.is_admin,
        }
    }
}
