//! HTTP DTOs for admin panel endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::access::{AccessSource, AllowedEmail};
use crate::domain::foundation::Timestamp;
use crate::domain::interpretation::InterpretationText;
use crate::domain::map::MapVariant;
use crate::domain::numerology::KarmicCategory;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to authorize an email.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEmailRequest {
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Request to revoke an email.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveEmailRequest {
    pub email: String,
}

/// Request to store or replace an interpretation text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertInterpretationRequest {
    pub variant: MapVariant,
    pub category: KarmicCategory,
    pub number: i32,
    pub text: String,
}

/// Request to delete a stored interpretation override.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteInterpretationRequest {
    pub variant: MapVariant,
    pub category: KarmicCategory,
    pub number: i32,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// An allow-list entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEntryResponse {
    pub email: String,
    pub is_admin: bool,
    pub source: AccessSource,
    pub authorized_at: Timestamp,
}

impl From<AllowedEmail> for EmailEntryResponse {
    fn from(entry: AllowedEmail) -> Self {
        Self {
            email: entry.email().as_str().to_string(),
            is_admin: entry.is_admin(),
            source: entry.source(),
            authorized_at: entry.authorized_at(),
        }
    }
}

/// A stored interpretation override.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationResponse {
    pub variant: MapVariant,
    pub category: KarmicCategory,
    pub number: i32,
    pub key: String,
    pub text: String,
    pub updated_at: Timestamp,
}

impl From<InterpretationText> for InterpretationResponse {
    fn from(entry: InterpretationText) -> Self {
        let key = entry.key();
        Self {
            variant: key.variant,
            category: key.category,
            number: key.number,
            key: key.category_key(),
            text: entry.text().to_string(),
            updated_at: entry.updated_at(),
        }
    }
}

/// Generic acknowledgement for admin commands.
#[derive(Debug, Clone, Serialize)]
pub struct AdminCommandResponse {
    pub message: String,
}
