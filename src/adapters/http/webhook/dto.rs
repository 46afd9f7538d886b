//! HTTP DTOs for webhook endpoints.

use serde::Serialize;

/// Acknowledgement returned to Yampi.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAckResponse {
    pub received: bool,
    pub status: String,
}
