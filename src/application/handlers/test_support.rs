//! Shared mock repositories for handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::access::AllowedEmail;
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, MapId};
use crate::domain::interpretation::{InterpretationKey, InterpretationText};
use crate::domain::map::{KarmicMap, MapVariant};
use crate::ports::{AllowedEmailRepository, InterpretationRepository, MapRepository};

fn storage_error() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Repository error")
}

/// In-memory mock of [`MapRepository`].
pub struct MockMapRepo {
    maps: Mutex<Vec<KarmicMap>>,
    should_fail: bool,
}

impl MockMapRepo {
    pub fn new() -> Self {
        Self {
            maps: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            maps: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn with_map(self, map: KarmicMap) -> Self {
        self.maps.lock().unwrap().push(map);
        self
    }

    pub fn count(&self) -> usize {
        self.maps.lock().unwrap().len()
    }
}

#[async_trait]
impl MapRepository for MockMapRepo {
    async fn save(&self, map: &KarmicMap) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(storage_error());
        }
        self.maps.lock().unwrap().push(map.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: MapId) -> Result<Option<KarmicMap>, DomainError> {
        if self.should_fail {
            return Err(storage_error());
        }
        Ok(self
            .maps
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    async fn list_by_owner(&self, owner: &EmailAddress) -> Result<Vec<KarmicMap>, DomainError> {
        if self.should_fail {
            return Err(storage_error());
        }
        Ok(self
            .maps
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.is_owned_by(owner))
            .cloned()
            .collect())
    }
}

/// In-memory mock of [`InterpretationRepository`].
pub struct MockInterpretationRepo {
    entries: Mutex<HashMap<String, InterpretationText>>,
}

impl MockInterpretationRepo {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_entry(self, entry: InterpretationText) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(entry.key().storage_key(), entry);
        self
    }
}

#[async_trait]
impl InterpretationRepository for MockInterpretationRepo {
    async fn upsert(&self, entry: &InterpretationText) -> Result<(), DomainError> {
        self.entries
            .lock()
            .unwrap()
            .insert(entry.key().storage_key(), entry.clone());
        Ok(())
    }

    async fn find(
        &self,
        key: InterpretationKey,
    ) -> Result<Option<InterpretationText>, DomainError> {
        Ok(self.entries.lock().unwrap().get(&key.storage_key()).cloned())
    }

    async fn list_by_variant(
        &self,
        variant: MapVariant,
    ) -> Result<Vec<InterpretationText>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.key().variant == variant)
            .cloned()
            .collect())
    }

    async fn delete(&self, key: InterpretationKey) -> Result<bool, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .remove(&key.storage_key())
            .is_some())
    }
}

/// In-memory mock of [`AllowedEmailRepository`].
pub struct MockEmailRepo {
    entries: Mutex<Vec<AllowedEmail>>,
    should_fail: bool,
}

impl MockEmailRepo {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn with_entry(self, entry: AllowedEmail) -> Self {
        self.entries.lock().unwrap().push(entry);
        self
    }

    pub fn contains(&self, email: &EmailAddress) -> bool {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.email() == email)
    }

    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl AllowedEmailRepository for MockEmailRepo {
    async fn upsert(&self, entry: &AllowedEmail) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(storage_error());
        }
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|e| e.email() != entry.email());
        entries.push(entry.clone());
        Ok(())
    }

    async fn remove(&self, email: &EmailAddress) -> Result<bool, DomainError> {
        if self.should_fail {
            return Err(storage_error());
        }
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.email() != email);
        Ok(entries.len() < before)
    }

    async fn find(&self, email: &EmailAddress) -> Result<Option<AllowedEmail>, DomainError> {
        if self.should_fail {
            return Err(storage_error());
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email() == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<AllowedEmail>, DomainError> {
        if self.should_fail {
            return Err(storage_error());
        }
        Ok(self.entries.lock().unwrap().clone())
    }
}
