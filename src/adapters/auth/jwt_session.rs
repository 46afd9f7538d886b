//! JWT session adapter.
//!
//! Issues and validates HS256 session tokens. Validation re-checks the
//! allow-list on every request, so revoking an email takes effect before
//! its tokens expire.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, EmailAddress, Timestamp};
use crate::ports::{AllowedEmailRepository, IssuedToken, SessionIssuer, SessionValidator};

/// Token claims. `sub` carries the normalized email.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    admin: bool,
    iat: u64,
    exp: u64,
}

/// Session service backed by HS256 JWTs and the allow-list.
pub struct JwtSessionService {
    secret: SecretString,
    ttl_secs: u64,
    emails: Arc<dyn AllowedEmailRepository>,
}

impl JwtSessionService {
    pub fn new(
        secret: SecretString,
        ttl_secs: u64,
        emails: Arc<dyn AllowedEmailRepository>,
    ) -> Self {
        Self {
            secret,
            ttl_secs,
            emails,
        }
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }
}

#[async_trait]
impl SessionIssuer for JwtSessionService {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError> {
        let now = Timestamp::now();
        let expires_at = now.plus_secs(self.ttl_secs);

        let claims = Claims {
            sub: user.email.as_str().to_string(),
            admin: user.is_admin,
            iat: now.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key())
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key(), &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let email =
            EmailAddress::new(&data.claims.sub).map_err(|_| AuthError::InvalidToken)?;

        // The token only proves who the caller is; whether they still have
        // access is decided by the allow-list right now.
        let entry = self
            .emails
            .find(&email)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or(AuthError::EmailNotAuthorized)?;

        Ok(AuthenticatedUser::new(email, entry.is_admin()))
    }
}
