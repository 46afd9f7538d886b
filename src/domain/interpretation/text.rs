//! Interpretation text entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

use super::key::InterpretationKey;

/// Maximum accepted interpretation length, in characters.
const MAX_TEXT_CHARS: usize = 8_000;

/// An editable interpretation text stored for one lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationText {
    key: InterpretationKey,
    text: String,
    updated_at: Timestamp,
}

impl InterpretationText {
    /// Creates an entry, rejecting empty or oversized texts.
    pub fn new(key: InterpretationKey, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(ValidationError::invalid_format(
                "text",
                "exceeds maximum length",
            ));
        }

        Ok(Self {
            key,
            text,
            updated_at: Timestamp::now(),
        })
    }

    /// Rehydrates an entry from stored fields.
    pub fn from_parts(key: InterpretationKey, text: String, updated_at: Timestamp) -> Self {
        Self {
            key,
            text,
            updated_at,
        }
    }

    pub fn key(&self) -> InterpretationKey {
        self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
