//! Yampi order webhook handling: signature verification, event parsing
//! and the access policy that maps orders to allow-list changes.

mod webhook_errors;
mod webhook_processor;
mod webhook_verifier;
mod yampi_event;

pub use webhook_errors::WebhookError;
pub use webhook_processor::{AccessDecision, OrderAccessPolicy};
pub use webhook_verifier::{YampiWebhookVerifier, SIGNATURE_HEADER};
pub use yampi_event::{OrderCustomer, OrderItem, OrderResource, YampiEvent, YampiEventType};

#[cfg(test)]
pub use webhook_verifier::compute_test_signature;
