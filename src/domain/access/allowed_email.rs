//! Allow-list entry aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, Timestamp};

/// How an email earned its place in the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessSource {
    /// Added by an admin through the panel.
    Manual,
    /// Granted automatically by a paid Yampi order.
    Purchase,
}

impl AccessSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessSource::Manual => "manual",
            AccessSource::Purchase => "purchase",
        }
    }
}

/// An authorized email. Users have no other account record: being listed
/// here is what "having an account" means in this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedEmail {
    email: EmailAddress,
    is_admin: bool,
    source: AccessSource,
    authorized_at: Timestamp,
}

impl AllowedEmail {
    /// Creates an entry added manually by an admin.
    pub fn manual(email: EmailAddress, is_admin: bool) -> Self {
        Self {
            email,
            is_admin,
            source: AccessSource::Manual,
            authorized_at: Timestamp::now(),
        }
    }

    /// Creates an entry granted by a paid order. Purchases never confer
    /// admin rights.
    pub fn from_purchase(email: EmailAddress) -> Self {
        Self {
            email,
            is_admin: false,
            source: AccessSource::Purchase,
            authorized_at: Timestamp::now(),
        }
    }

    /// Rehydrates an entry from stored fields.
    pub fn from_parts(
        email: EmailAddress,
        is_admin: bool,
        source: AccessSource,
        authorized_at: Timestamp,
    ) -> Self {
        Self {
            email,
            is_admin,
            source,
            authorized_at,
        }
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn source(&self) -> AccessSource {
        self.source
    }

    pub fn authorized_at(&self) -> Timestamp {
        self.authorized_at
    }
}
