//! Yampi webhook signature verification.
//!
//! Yampi signs the raw request body with HMAC-SHA256 and sends the result
//! base64-encoded in the `X-Yampi-Hmac-SHA256` header. There is no
//! timestamp element in the scheme, so verification is a single
//! constant-time comparison against the recomputed digest.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::webhook_errors::WebhookError;
use super::yampi_event::YampiEvent;

/// Header carrying the base64 HMAC of the payload.
pub const SIGNATURE_HEADER: &str = "X-Yampi-Hmac-SHA256";

/// Verifier for Yampi webhook signatures.
pub struct YampiWebhookVerifier {
    /// The webhook signing secret from the Yampi dashboard.
    secret: SecretString,
}

impl YampiWebhookVerifier {
    /// Creates a new verifier with the given webhook secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verifies the webhook signature and parses the event.
    ///
    /// # Errors
    ///
    /// - `InvalidSignature` - Signature verification failed
    /// - `ParseError` - Signature was not valid base64, or the payload was
    ///   not valid JSON
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<YampiEvent, WebhookError> {
        let received = BASE64
            .decode(signature_header.trim())
            .map_err(|_| WebhookError::parse_error("signature is not valid base64"))?;

        let expected = self.compute_signature(payload);

        if !constant_time_compare(&expected, &received) {
            return Err(WebhookError::InvalidSignature);
        }

        serde_json::from_slice(payload).map_err(|e| WebhookError::parse_error(e.to_string()))
    }

    /// Computes the HMAC-SHA256 digest of the payload.
    fn compute_signature(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// This prevents timing attacks that could leak information about the
/// expected signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a base64 HMAC-SHA256 for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, payload: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(payload.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
