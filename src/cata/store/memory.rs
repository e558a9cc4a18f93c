use super::BlobStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.blobs.contains_key(key)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Coffee, CoffeeDraft};
    use crate::store::LOGS_KEY;
    use chrono::{TimeZone, Utc};

    pub fn draft(name: &str, origin: &str, roaster: &str) -> CoffeeDraft {
        CoffeeDraft {
            name: name.to_string(),
            origin: origin.to_string(),
            roaster: roaster.to_string(),
            year: 2023,
            rating: 4.0,
            notes: format!("Notes for {}", name),
            recipe: None,
            image_url: None,
        }
    }

    /// A record with a deterministic id and date, for view/sort tests.
    pub fn coffee(id: &str, name: &str, day: u32) -> Coffee {
        Coffee {
            id: id.to_string(),
            name: name.to_string(),
            origin: "Colombia".to_string(),
            roaster: "El Vergel".to_string(),
            year: 2023,
            rating: 4.0,
            notes: String::new(),
            recipe: None,
            image_url: None,
            is_favorite: false,
            date: Utc.with_ymd_and_hms(2023, 6, day, 8, 0, 0).unwrap(),
            ai_insights: None,
        }
    }

    /// A store whose logs blob is pre-seeded with the given records.
    pub fn seeded_store(coffees: &[Coffee]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let blob = serde_json::to_string(coffees).unwrap();
        store.save(LOGS_KEY, &blob).unwrap();
        store
    }

    /// Store whose every save fails, for exercising persistence warnings.
    /// Loads work normally so a journal can still initialize over it.
    #[derive(Default)]
    pub struct FailingStore {
        blobs: HashMap<String, String>,
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl BlobStore for FailingStore {
        fn load(&self, key: &str) -> Result<Option<String>> {
            Ok(self.blobs.get(key).cloned())
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(crate::error::CataError::Store("disk full".to_string()))
        }

        fn exists(&self, key: &str) -> bool {
            self.blobs.contains_key(key)
        }
    }
}
