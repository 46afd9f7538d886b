//! KarmicMap aggregate - a persisted reading for one user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, MapId, Timestamp};
use crate::domain::numerology::{calculate_all, BirthDate, KarmicNumberSet};

use super::variant::MapVariant;

/// A generated karmic map owned by a user.
///
/// The number set is derived once at generation time and stored with the
/// map; regenerating from the same birth date always yields the same
/// numbers, so the stored copy is a cache of a deterministic computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicMap {
    id: MapId,
    owner: EmailAddress,
    birth_date: BirthDate,
    numbers: KarmicNumberSet,
    variant: MapVariant,
    created_at: Timestamp,
}

impl KarmicMap {
    /// Generates a new map: runs the calculator over the birth date and
    /// stamps the result with a fresh id.
    pub fn generate(owner: EmailAddress, birth_date: BirthDate, variant: MapVariant) -> Self {
        Self {
            id: MapId::new(),
            owner,
            numbers: calculate_all(&birth_date),
            birth_date,
            variant,
            created_at: Timestamp::now(),
        }
    }

    /// Rehydrates a map from stored fields without recomputing.
    pub fn from_parts(
        id: MapId,
        owner: EmailAddress,
        birth_date: BirthDate,
        numbers: KarmicNumberSet,
        variant: MapVariant,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner,
            birth_date,
            numbers,
            variant,
            created_at,
        }
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn owner(&self) -> &EmailAddress {
        &self.owner
    }

    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    pub fn numbers(&self) -> &KarmicNumberSet {
        &self.numbers
    }

    pub fn variant(&self) -> MapVariant {
        self.variant
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns true if the given email owns this map.
    pub fn is_owned_by(&self, email: &EmailAddress) -> bool {
        &self.owner == email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_email() -> EmailAddress {
        EmailAddress::new("maria@example.com").unwrap()
    }

    #[test]
    fn generate_computes_numbers_from_birth_date() {
        let date = BirthDate::parse("15/07/1985").unwrap();
        let map = KarmicMap::generate(test_email(), date, MapVariant::Personal);

        assert_eq!(map.numbers().spiritual_mark, 3);
        assert_eq!(map.numbers().destiny_call, 9);
        assert_eq!(map.numbers().karma_portal, 4);
        assert_eq!(map.numbers().karmic_inheritance, 9);
        assert_eq!(map.variant(), MapVariant::Personal);
    }

    #[test]
    fn generate_assigns_unique_ids() {
        let date = BirthDate::parse("15/07/1985").unwrap();
        let a = KarmicMap::generate(test_email(), date, MapVariant::Personal);
        let b = KarmicMap::generate(test_email(), date, MapVariant::Personal);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn generate_is_deterministic_across_variants() {
        let date = BirthDate::parse("05/07/1990").unwrap();
        let personal = KarmicMap::generate(test_email(), date, MapVariant::Personal);
        let love = KarmicMap::generate(test_email(), date, MapVariant::Love);
        assert_eq!(personal.numbers(), love.numbers());
    }

    #[test]
    fn is_owned_by_compares_normalized_emails() {
        let date = BirthDate::parse("15/07/1985").unwrap();
        let map = KarmicMap::generate(test_email(), date, MapVariant::Love);

        let same = EmailAddress::new("MARIA@example.com").unwrap();
        let other = EmailAddress::new("joao@example.com").unwrap();
        assert!(map.is_owned_by(&same));
        assert!(!map.is_owned_by(&other));
    }

    #[test]
    fn from_parts_round_trips_storage_fields() {
        let date = BirthDate::parse("15/07/1985").unwrap();
        let original = KarmicMap::generate(test_email(), date, MapVariant::Professional);

        let rehydrated = KarmicMap::from_parts(
            original.id(),
            original.owner().clone(),
            *original.birth_date(),
            *original.numbers(),
            original.variant(),
            original.created_at(),
        );

        assert_eq!(rehydrated, original);
    }
}
