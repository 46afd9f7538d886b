//! Interpretation lookup keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::map::MapVariant;
use crate::domain::numerology::KarmicCategory;

/// Identifies one interpretation text: a karmic number within a category,
/// read through a map variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterpretationKey {
    pub variant: MapVariant,
    pub category: KarmicCategory,
    pub number: i32,
}

impl InterpretationKey {
    pub fn new(variant: MapVariant, category: KarmicCategory, number: i32) -> Self {
        Self {
            variant,
            category,
            number,
        }
    }

    /// The `"<category>-<number>"` fragment downstream tables are keyed by.
    pub fn category_key(&self) -> String {
        self.category.lookup_key(self.number)
    }

    /// The full storage key, qualified by variant.
    pub fn storage_key(&self) -> String {
        format!("{}:{}", self.variant.as_str(), self.category_key())
    }
}

impl fmt::Display for InterpretationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}
