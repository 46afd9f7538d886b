//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::EmailAddress;

/// Session token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing key for session tokens
    pub jwt_secret: SecretString,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Emails with admin panel access (comma-separated)
    #[serde(default)]
    pub admin_emails: Option<String>,
}

impl AuthConfig {
    /// Get admin emails as normalized addresses
    pub fn admin_email_list(&self) -> Vec<EmailAddress> {
        self.admin_emails
            .as_ref()
            .map(|s| {
                s.split(',')
                    .filter_map(|raw| EmailAddress::new(raw).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check whether an email is configured as admin
    pub fn is_admin(&self, email: &EmailAddress) -> bool {
        self.admin_email_list().contains(email)
    }

    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.session_ttl_secs < 300 || self.session_ttl_secs > 2_592_000 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if let Some(raw) = &self.admin_emails {
            for part in raw.split(',') {
                if EmailAddress::new(part).is_err() {
                    return Err(ValidationError::InvalidAdminEmail(part.trim().to_string()));
                }
            }
        }
        Ok(())
    }
}

fn default_session_ttl() -> u64 {
    86_400 // 24 hours
}
