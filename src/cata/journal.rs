//! # The Journal (record store)
//!
//! Sole owner of the canonical record collection. All mutation goes
//! through it, and every mutation writes the whole collection back to the
//! [`BlobStore`] before returning (write-through), so durable state always
//! matches the last completed in-memory mutation.
//!
//! Two conditions are absorbed here instead of propagating:
//! - an unparsable stored blob at [`Journal::initialize`] falls back to an
//!   empty collection and records a load warning;
//! - a failed save keeps the in-memory state authoritative and queues a
//!   warning retrievable via [`Journal::take_persist_warnings`].

use crate::archive::{placeholder_image, ArchiveEntry};
use crate::error::{CataError, Result};
use crate::insights::InsightProvider;
use crate::model::{Coffee, CoffeeDraft};
use crate::store::{BlobStore, ARCHIVE_FLAG_KEY, LOGS_KEY};
use chrono::{Duration, TimeZone, Utc};

pub struct Journal<S: BlobStore> {
    store: S,
    coffees: Vec<Coffee>,
    archive_imported: bool,
    load_warning: Option<String>,
    persist_warnings: Vec<String>,
}

impl<S: BlobStore> Journal<S> {
    /// Load the collection and the import flag from the store.
    ///
    /// An absent blob starts an empty journal; a present but unparsable
    /// blob also starts empty, with the condition kept as a load warning.
    /// This never fails: a corrupt store must not take the process down.
    pub fn initialize(store: S) -> Self {
        let mut load_warning = None;
        let coffees = match store.load(LOGS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Coffee>>(&blob) {
                Ok(coffees) => coffees,
                Err(e) => {
                    load_warning = Some(format!(
                        "Stored journal could not be parsed, starting empty: {}",
                        e
                    ));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                load_warning = Some(format!(
                    "Stored journal could not be read, starting empty: {}",
                    e
                ));
                Vec::new()
            }
        };
        let archive_imported = store.exists(ARCHIVE_FLAG_KEY);

        Self {
            store,
            coffees,
            archive_imported,
            load_warning,
            persist_warnings: Vec::new(),
        }
    }

    pub fn coffees(&self) -> &[Coffee] {
        &self.coffees
    }

    pub fn len(&self) -> usize {
        self.coffees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coffees.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Coffee> {
        self.coffees.iter().find(|c| c.id == id)
    }

    pub fn archive_imported(&self) -> bool {
        self.archive_imported
    }

    /// Warning recorded at initialize, if the stored blob was unusable.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Take (and clear) all warnings queued by failed saves. A single
    /// operation can fail more than one save (import writes the flag and
    /// the collection), so this is a queue, not a slot.
    pub fn take_persist_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.persist_warnings)
    }

    /// Resolve a full id or a unique id prefix to the stored id.
    pub fn resolve_id(&self, needle: &str) -> Result<String> {
        if let Some(coffee) = self.get(needle) {
            return Ok(coffee.id.clone());
        }
        let mut matches = self.coffees.iter().filter(|c| c.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(coffee), None) => Ok(coffee.id.clone()),
            (Some(_), Some(_)) => Err(CataError::Api(format!(
                "Id prefix '{}' is ambiguous",
                needle
            ))),
            (None, _) => Err(CataError::NotFound(needle.to_string())),
        }
    }

    /// Create a record from a draft. The insight provider is consulted
    /// once; its failure never blocks creation. The new record is
    /// prepended, then the collection is written through.
    pub fn create(
        &mut self,
        draft: CoffeeDraft,
        insights: &dyn InsightProvider,
    ) -> Result<Coffee> {
        draft.validate()?;
        let ai = insights.generate(&draft.origin, &draft.roaster, &draft.notes);
        let coffee = Coffee::new(draft, ai);
        self.coffees.insert(0, coffee.clone());
        self.persist();
        Ok(coffee)
    }

    /// Replace every user-editable field of `id` from the draft; id and
    /// date are never altered. The insight provider is re-invoked only
    /// when the notes actually changed, otherwise the existing insight is
    /// carried over verbatim.
    pub fn update(
        &mut self,
        id: &str,
        draft: CoffeeDraft,
        insights: &dyn InsightProvider,
    ) -> Result<Coffee> {
        draft.validate()?;
        let pos = self
            .coffees
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CataError::NotFound(id.to_string()))?;

        let ai = if self.coffees[pos].notes != draft.notes {
            insights.generate(&draft.origin, &draft.roaster, &draft.notes)
        } else {
            self.coffees[pos].ai_insights.clone()
        };

        let existing = &mut self.coffees[pos];
        existing.name = draft.name;
        existing.origin = draft.origin;
        existing.roaster = draft.roaster;
        existing.year = draft.year;
        existing.rating = draft.rating;
        existing.notes = draft.notes;
        existing.recipe = draft.recipe;
        existing.image_url = draft.image_url;
        existing.ai_insights = ai;

        let updated = self.coffees[pos].clone();
        self.persist();
        Ok(updated)
    }

    /// Flip the favorite bit. Unknown ids are a silent no-op: this is a
    /// convenience action, never expected to target a missing record.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<Coffee> {
        let coffee = self.coffees.iter_mut().find(|c| c.id == id)?;
        coffee.is_favorite = !coffee.is_favorite;
        let updated = coffee.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the record with `id`; no-op when absent.
    pub fn delete(&mut self, id: &str) -> Option<Coffee> {
        let pos = self.coffees.iter().position(|c| c.id == id)?;
        let removed = self.coffees.remove(pos);
        self.persist();
        Some(removed)
    }

    /// One-time import of the historical archive. Ids (`"2021-{i}"`) and
    /// dates (2021-01-01 plus `i` days) are synthesized so ordering among
    /// imported entries is deterministic and chronological. Returns the
    /// number of records imported; 0 when the import already happened.
    pub fn import_archive(&mut self, entries: &[ArchiveEntry]) -> Result<usize> {
        if self.archive_imported {
            return Ok(0);
        }

        let base = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).single().ok_or(
            CataError::Api("Invalid archive base date".to_string()),
        )?;

        let imported: Vec<Coffee> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Coffee {
                id: format!("2021-{}", index),
                name: entry.name.to_string(),
                origin: entry.origin.to_string(),
                roaster: entry.roaster.to_string(),
                year: entry.year,
                rating: entry.rating,
                notes: entry.notes.to_string(),
                recipe: entry.recipe.map(str::to_string),
                image_url: Some(
                    entry
                        .image_url
                        .map(str::to_string)
                        .unwrap_or_else(|| placeholder_image(index)),
                ),
                is_favorite: false,
                date: base + Duration::days(index as i64),
                ai_insights: None,
            })
            .collect();

        let count = imported.len();
        self.coffees.splice(0..0, imported);
        self.archive_imported = true;
        if let Err(e) = self.store.save(ARCHIVE_FLAG_KEY, "true") {
            self.persist_warnings
                .push(format!("Failed to save import flag: {}", e));
        }
        self.persist();
        Ok(count)
    }

    /// Write the full collection through to the store. On failure the
    /// in-memory state stays authoritative and a warning is queued.
    fn persist(&mut self) {
        let blob = match serde_json::to_string_pretty(&self.coffees) {
            Ok(blob) => blob,
            Err(e) => {
                self.persist_warnings
                    .push(format!("Failed to serialize journal: {}", e));
                return;
            }
        };
        if let Err(e) = self.store.save(LOGS_KEY, &blob) {
            self.persist_warnings
                .push(format!("Failed to save journal: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ARCHIVE_2021;
    use crate::insights::NoInsights;
    use crate::store::memory::fixtures::{coffee, draft, seeded_store, FailingStore};
    use crate::store::memory::InMemoryStore;

    /// Provider returning a fixed insight, counting invocations.
    struct StaticInsights {
        text: &'static str,
        calls: std::cell::Cell<usize>,
    }

    impl StaticInsights {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                calls: std::cell::Cell::new(0),
            }
        }
    }

    impl InsightProvider for StaticInsights {
        fn generate(&self, _: &str, _: &str, _: &str) -> Option<String> {
            self.calls.set(self.calls.get() + 1);
            Some(self.text.to_string())
        }
    }

    #[test]
    fn initialize_from_empty_store() {
        let journal = Journal::initialize(InMemoryStore::new());
        assert!(journal.is_empty());
        assert!(journal.load_warning().is_none());
    }

    #[test]
    fn initialize_recovers_from_corrupt_blob() {
        let mut store = InMemoryStore::new();
        store.save(LOGS_KEY, "not json at all").unwrap();
        let journal = Journal::initialize(store);
        assert!(journal.is_empty());
        assert!(journal.load_warning().is_some());
    }

    #[test]
    fn create_prepends_and_persists() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let before = Utc::now();
        journal
            .create(draft("First", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();
        let second = journal
            .create(draft("Second", "Ethiopia", "Nomad"), &NoInsights)
            .unwrap();

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.coffees()[0].id, second.id);
        assert!(second.date >= before);
        assert_ne!(journal.coffees()[0].id, journal.coffees()[1].id);
    }

    #[test]
    fn create_rejects_invalid_draft_without_mutating() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let mut bad = draft("", "Colombia", "El Vergel");
        bad.name = String::new();
        assert!(matches!(
            journal.create(bad, &NoInsights),
            Err(CataError::Validation(_))
        ));
        assert!(journal.is_empty());
    }

    #[test]
    fn create_attaches_insight_when_provider_answers() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let provider = StaticInsights::new("Grind coarser.");
        let coffee = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &provider)
            .unwrap();
        assert_eq!(coffee.ai_insights.as_deref(), Some("Grind coarser."));
    }

    #[test]
    fn create_survives_provider_failure() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let coffee = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();
        assert!(coffee.ai_insights.is_none());
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let result = journal.update("missing", draft("A", "B", "C"), &NoInsights);
        assert!(matches!(result, Err(CataError::NotFound(_))));
    }

    #[test]
    fn update_preserves_insight_when_notes_unchanged() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let provider = StaticInsights::new("Original insight");
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &provider)
            .unwrap();
        assert_eq!(provider.calls.get(), 1);

        let mut edit = CoffeeDraft::from(&created);
        edit.rating = 3.0;
        let updated = journal.update(&created.id, edit, &provider).unwrap();

        assert_eq!(provider.calls.get(), 1);
        assert_eq!(updated.ai_insights.as_deref(), Some("Original insight"));
        assert_eq!(updated.rating, 3.0);
    }

    #[test]
    fn update_reinvokes_provider_when_notes_change() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let provider = StaticInsights::new("Fresh insight");
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();
        assert!(created.ai_insights.is_none());

        let mut edit = CoffeeDraft::from(&created);
        edit.notes = "Completely new notes".to_string();
        let updated = journal.update(&created.id, edit, &provider).unwrap();

        assert_eq!(provider.calls.get(), 1);
        assert_eq!(updated.ai_insights.as_deref(), Some("Fresh insight"));
    }

    #[test]
    fn update_replaces_on_provider_failure_when_notes_change() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let provider = StaticInsights::new("Will be lost");
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &provider)
            .unwrap();

        let mut edit = CoffeeDraft::from(&created);
        edit.notes = "Different notes".to_string();
        let updated = journal.update(&created.id, edit, &NoInsights).unwrap();
        assert!(updated.ai_insights.is_none());
    }

    #[test]
    fn update_never_touches_id_or_date() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();
        let mut edit = CoffeeDraft::from(&created);
        edit.name = "Renamed".to_string();
        let updated = journal.update(&created.id, edit, &NoInsights).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, created.date);
    }

    #[test]
    fn toggle_favorite_is_its_own_inverse() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();

        let once = journal.toggle_favorite(&created.id).unwrap();
        assert!(once.is_favorite);
        let twice = journal.toggle_favorite(&created.id).unwrap();
        assert!(!twice.is_favorite);
    }

    #[test]
    fn toggle_favorite_unknown_id_is_silent() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        assert!(journal.toggle_favorite("missing").is_none());
    }

    #[test]
    fn delete_shrinks_collection_by_one() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let a = journal
            .create(draft("A", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();
        journal
            .create(draft("B", "Ethiopia", "Nomad"), &NoInsights)
            .unwrap();

        assert!(journal.delete(&a.id).is_some());
        assert_eq!(journal.len(), 1);
        assert!(journal.get(&a.id).is_none());
        assert!(journal.delete(&a.id).is_none());
    }

    #[test]
    fn import_archive_is_idempotent() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let first = journal.import_archive(ARCHIVE_2021).unwrap();
        assert_eq!(first, ARCHIVE_2021.len());
        let second = journal.import_archive(ARCHIVE_2021).unwrap();
        assert_eq!(second, 0);
        assert_eq!(journal.len(), ARCHIVE_2021.len());
    }

    #[test]
    fn import_synthesizes_ids_dates_and_images() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        journal.import_archive(ARCHIVE_2021).unwrap();

        let coffees = journal.coffees();
        assert_eq!(coffees[0].id, "2021-0");
        assert_eq!(coffees[1].id, "2021-1");
        assert_eq!(coffees[1].date - coffees[0].date, Duration::days(1));
        assert!(coffees.iter().all(|c| c.image_url.is_some()));
        assert!(coffees.iter().all(|c| !c.is_favorite));
    }

    #[test]
    fn import_prepends_ahead_of_existing_records() {
        let store = seeded_store(&[coffee("live-1", "Modern", 15)]);
        let mut journal = Journal::initialize(store);
        journal.import_archive(ARCHIVE_2021).unwrap();
        assert_eq!(journal.coffees()[0].id, "2021-0");
        assert_eq!(journal.coffees().last().unwrap().id, "live-1");
    }

    #[test]
    fn mutations_write_through_to_the_store() {
        let mut journal = Journal::initialize(InMemoryStore::new());
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();

        // A second journal over the same blob sees the mutation.
        let blob = journal.store.load(LOGS_KEY).unwrap().unwrap();
        let reloaded: Vec<Coffee> = serde_json::from_str(&blob).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id, created.id);
    }

    #[test]
    fn save_failure_keeps_memory_authoritative_and_warns() {
        let mut journal = Journal::initialize(FailingStore::new());
        let created = journal
            .create(draft("Sidra", "Colombia", "El Vergel"), &NoInsights)
            .unwrap();

        // The mutation stands despite the failed write-through.
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.get(&created.id), Some(&created));

        let warnings = journal.take_persist_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to save journal"));
        assert!(journal.take_persist_warnings().is_empty());
    }

    #[test]
    fn import_under_save_failure_reports_both_failed_writes() {
        let mut journal = Journal::initialize(FailingStore::new());
        let imported = journal.import_archive(ARCHIVE_2021).unwrap();
        assert_eq!(imported, ARCHIVE_2021.len());
        assert_eq!(journal.len(), ARCHIVE_2021.len());

        // The flag write and the collection write each warn.
        let warnings = journal.take_persist_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("import flag"));
        assert!(warnings[1].contains("Failed to save journal"));
    }

    #[test]
    fn resolve_id_accepts_unique_prefix() {
        let store = seeded_store(&[coffee("abc-123", "A", 1), coffee("xyz-789", "B", 2)]);
        let journal = Journal::initialize(store);
        assert_eq!(journal.resolve_id("abc").unwrap(), "abc-123");
        assert!(matches!(
            journal.resolve_id("nope"),
            Err(CataError::NotFound(_))
        ));
    }

    #[test]
    fn resolve_id_rejects_ambiguous_prefix() {
        let store = seeded_store(&[coffee("ab-1", "A", 1), coffee("ab-2", "B", 2)]);
        let journal = Journal::initialize(store);
        assert!(matches!(
            journal.resolve_id("ab"),
            Err(CataError::Api(_))
        ));
    }
}
