//! ProcessOrderEvent - Command handler for verified Yampi deliveries.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::access::AllowedEmail;
use crate::domain::foundation::{DomainError, EmailAddress};
use crate::domain::orders::{
    AccessDecision, OrderAccessPolicy, WebhookError, YampiWebhookVerifier,
};
use crate::ports::AllowedEmailRepository;

/// What a processed delivery did to the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The buyer's email was authorized.
    Granted { email: EmailAddress },
    /// The buyer's email was revoked.
    Revoked { email: EmailAddress },
    /// The event required no action.
    Ignored,
}

/// Errors from webhook processing, split so the HTTP layer can map
/// verification failures to 4xx and store failures to 5xx.
#[derive(Debug, Error)]
pub enum WebhookProcessingError {
    #[error(transparent)]
    Verification(#[from] WebhookError),

    #[error(transparent)]
    Store(#[from] DomainError),
}

/// Handler for the Yampi webhook endpoint.
pub struct ProcessOrderEventHandler {
    verifier: YampiWebhookVerifier,
    policy: OrderAccessPolicy,
    emails: Arc<dyn AllowedEmailRepository>,
}

impl ProcessOrderEventHandler {
    pub fn new(
        verifier: YampiWebhookVerifier,
        policy: OrderAccessPolicy,
        emails: Arc<dyn AllowedEmailRepository>,
    ) -> Self {
        Self {
            verifier,
            policy,
            emails,
        }
    }

    /// Verifies the delivery, decides its access consequence, and applies
    /// it. Repeat deliveries are no-ops: granting an already listed email
    /// upserts, revoking an absent one simply reports removed=false.
    pub async fn handle(
        &self,
        payload: &[u8],
        signature_header: Option<&str>,
    ) -> Result<WebhookOutcome, WebhookProcessingError> {
        let signature = signature_header.ok_or(WebhookError::MissingSignature)?;

        let event = self.verifier.verify_and_parse(payload, signature)?;
        let decision = self.policy.decide(&event)?;

        match decision {
            AccessDecision::Grant { email } => {
                // Never downgrade an existing entry: a manual admin grant
                // survives a later purchase event for the same email.
                if self.emails.find(&email).await?.is_none() {
                    self.emails
                        .upsert(&AllowedEmail::from_purchase(email.clone()))
                        .await?;
                }

                tracing::info!(email = %email, event = %event.event, "access granted by order");
                Ok(WebhookOutcome::Granted { email })
            }
            AccessDecision::Revoke { email } => {
                let removed = self.emails.remove(&email).await?;

                tracing::info!(
                    email = %email,
                    event = %event.event,
                    removed,
                    "access revoked by order"
                );
                Ok(WebhookOutcome::Revoked { email })
            }
            AccessDecision::Ignore => {
                tracing::debug!(event = %event.event, "webhook event ignored");
                Ok(WebhookOutcome::Ignored)
            }
        }
    }
}
