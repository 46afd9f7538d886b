//! Order event to access decision mapping.
//!
//! A paid order for one of the configured product SKUs authorizes the
//! buyer's email; a refund or cancellation revokes it. Everything else is
//! acknowledged and ignored.

use std::collections::HashSet;

use crate::domain::foundation::EmailAddress;

use super::webhook_errors::WebhookError;
use super::yampi_event::{OrderResource, YampiEvent, YampiEventType};

/// The access consequence of one webhook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Authorize the email (insert into the allow-list).
    Grant { email: EmailAddress },
    /// Revoke the email's authorization.
    Revoke { email: EmailAddress },
    /// Nothing to do for this event.
    Ignore,
}

/// Policy that turns verified Yampi events into access decisions.
#[derive(Debug, Clone)]
pub struct OrderAccessPolicy {
    /// SKUs that grant access. Empty means every paid order grants access.
    product_skus: HashSet<String>,
}

impl OrderAccessPolicy {
    /// Creates a policy for the given product SKUs.
    pub fn new(skus: impl IntoIterator<Item = String>) -> Self {
        Self {
            product_skus: skus.into_iter().collect(),
        }
    }

    /// Decides what a verified event means for the allow-list.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` when an order.* event carries a resource that
    /// does not look like an order, or a buyer email that is malformed.
    pub fn decide(&self, event: &YampiEvent) -> Result<AccessDecision, WebhookError> {
        match event.parsed_type() {
            YampiEventType::OrderPaid => {
                let order = self.parse_order(event)?;

                if !self.order_matches(&order) {
                    return Ok(AccessDecision::Ignore);
                }

                Ok(AccessDecision::Grant {
                    email: self.parse_email(&order)?,
                })
            }
            YampiEventType::OrderRefunded | YampiEventType::OrderCancelled => {
                let order = self.parse_order(event)?;

                if !self.order_matches(&order) {
                    return Ok(AccessDecision::Ignore);
                }

                Ok(AccessDecision::Revoke {
                    email: self.parse_email(&order)?,
                })
            }
            YampiEventType::Unknown => Ok(AccessDecision::Ignore),
        }
    }

    fn parse_order(&self, event: &YampiEvent) -> Result<OrderResource, WebhookError> {
        event
            .deserialize_resource()
            .map_err(|e| WebhookError::parse_error(format!("order resource: {}", e)))
    }

    fn parse_email(&self, order: &OrderResource) -> Result<EmailAddress, WebhookError> {
        EmailAddress::new(&order.customer.email)
            .map_err(|e| WebhookError::parse_error(format!("customer email: {}", e)))
    }

    fn order_matches(&self, order: &OrderResource) -> bool {
        if self.product_skus.is_empty() {
            return true;
        }
        order
            .items
            .iter()
            .any(|item| self.product_skus.contains(&item.sku))
    }
}
