//! The aggregate result of a karmic number calculation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The four karmic number categories.
///
/// The string form of each category is a stable identifier: interpretation
/// texts are stored under `"<category>-<number>"` keys (for example
/// `"spiritualMark-7"`), so renaming a variant here would orphan every
/// stored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KarmicCategory {
    #[serde(rename = "spiritualMark")]
    SpiritualMark,
    #[serde(rename = "destinyCall")]
    DestinyCall,
    #[serde(rename = "karmaPortal")]
    KarmaPortal,
    #[serde(rename = "karmicInheritance")]
    KarmicInheritance,
}

impl KarmicCategory {
    /// All categories, in presentation order.
    pub const ALL: [KarmicCategory; 4] = [
        KarmicCategory::SpiritualMark,
        KarmicCategory::DestinyCall,
        KarmicCategory::KarmaPortal,
        KarmicCategory::KarmicInheritance,
    ];

    /// The stable identifier used in lookup keys and JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            KarmicCategory::SpiritualMark => "spiritualMark",
            KarmicCategory::DestinyCall => "destinyCall",
            KarmicCategory::KarmaPortal => "karmaPortal",
            KarmicCategory::KarmicInheritance => "karmicInheritance",
        }
    }

    /// Builds the interpretation lookup key for a number in this category.
    pub fn lookup_key(&self, number: i32) -> String {
        format!("{}-{}", self.as_str(), number)
    }
}

impl fmt::Display for KarmicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KarmicCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spiritualMark" => Ok(KarmicCategory::SpiritualMark),
            "destinyCall" => Ok(KarmicCategory::DestinyCall),
            "karmaPortal" => Ok(KarmicCategory::KarmaPortal),
            "karmicInheritance" => Ok(KarmicCategory::KarmicInheritance),
            _ => Err(ValidationError::invalid_format(
                "category",
                "unknown karmic category",
            )),
        }
    }
}

/// The four derived karmic numbers for one birth date.
///
/// Serializes with the exact camelCase field names the interpretation
/// tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KarmicNumberSet {
    pub spiritual_mark: i32,
    pub destiny_call: i32,
    pub karma_portal: i32,
    pub karmic_inheritance: i32,
}

impl KarmicNumberSet {
    /// Returns the number for the given category.
    pub fn get(&self, category: KarmicCategory) -> i32 {
        match category {
            KarmicCategory::SpiritualMark => self.spiritual_mark,
            KarmicCategory::DestinyCall => self.destiny_call,
            KarmicCategory::KarmaPortal => self.karma_portal,
            KarmicCategory::KarmicInheritance => self.karmic_inheritance,
        }
    }

    /// Returns all (category, number) pairs in presentation order.
    pub fn entries(&self) -> [(KarmicCategory, i32); 4] {
        KarmicCategory::ALL.map(|category| (category, self.get(category)))
    }
}
