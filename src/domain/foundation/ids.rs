//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a generated karmic map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(Uuid);

impl MapId {
    /// Creates a new random MapId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a MapId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MapId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MapId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A normalized email address, the user identity of the application.
///
/// Users have no account record beyond their presence in the allow-list,
/// so the email address doubles as the user identifier everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates an email address, trimming whitespace and lowercasing.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = raw.as_ref().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }

        // Minimal structural check: local part, one '@', non-empty domain with a dot.
        let (local, domain) = normalized
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format("email", "missing @ symbol"))?;

        if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
            return Err(ValidationError::invalid_format(
                "email",
                "malformed address",
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_id_new_generates_unique_ids() {
        let a = MapId::new();
        let b = MapId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn map_id_round_trips_through_string() {
        let id = MapId::new();
        let parsed: MapId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn email_address_normalizes_case_and_whitespace() {
        let email = EmailAddress::new("  Maria.Silva@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "maria.silva@example.com");
    }

    #[test]
    fn email_address_rejects_empty() {
        assert!(matches!(
            EmailAddress::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn email_address_rejects_missing_at() {
        assert!(matches!(
            EmailAddress::new("maria.example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn email_address_rejects_bare_domain() {
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("maria@").is_err());
        assert!(EmailAddress::new("maria@localhost").is_err());
    }

    #[test]
    fn email_address_serializes_transparently() {
        let email = EmailAddress::new("maria@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"maria@example.com\"");
    }
}
