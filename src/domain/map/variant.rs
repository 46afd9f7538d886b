//! Map variant value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The three offered readings of the same number set.
///
/// Each variant selects a different interpretation catalog; the numbers
/// themselves are identical across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapVariant {
    Personal,
    Love,
    Professional,
}

impl MapVariant {
    /// All variants, in presentation order.
    pub const ALL: [MapVariant; 3] = [
        MapVariant::Personal,
        MapVariant::Love,
        MapVariant::Professional,
    ];

    /// The stable identifier used in storage keys and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapVariant::Personal => "personal",
            MapVariant::Love => "love",
            MapVariant::Professional => "professional",
        }
    }
}

impl fmt::Display for MapVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MapVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(MapVariant::Personal),
            "love" => Ok(MapVariant::Love),
            "professional" => Ok(MapVariant::Professional),
            _ => Err(ValidationError::invalid_format(
                "variant",
                "unknown map variant",
            )),
        }
    }
}
