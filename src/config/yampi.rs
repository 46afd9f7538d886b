//! Yampi webhook configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Yampi e-commerce integration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct YampiConfig {
    /// Webhook signing secret from the Yampi dashboard
    pub webhook_secret: SecretString,

    /// SKUs that grant access (comma-separated). Empty means every paid
    /// order grants access.
    #[serde(default)]
    pub product_skus: Option<String>,
}

impl YampiConfig {
    /// Get product SKUs as a vector
    pub fn product_sku_list(&self) -> Vec<String> {
        self.product_skus
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|sku| sku.trim().to_string())
                    .filter(|sku| !sku.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Validate Yampi configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.webhook_secret.expose_secret().is_empty() {
            return Err(ValidationError::EmptyWebhookSecret);
        }
        Ok(())
    }
}
