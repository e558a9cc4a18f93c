//! # API Facade
//!
//! The single entry point for all cata operations, regardless of the UI
//! driving them. The facade dispatches to the command layer and returns
//! structured results; it never prints, never exits, and holds no
//! business logic of its own.
//!
//! `CataApi<S: BlobStore>` is generic over the storage backend
//! (production `FileStore`, testing `InMemoryStore`), and the insight
//! provider is injected as a trait object so the HTTP client never leaks
//! into command tests.

use crate::commands;
use crate::error::Result;
use crate::insights::InsightProvider;
use crate::journal::Journal;
use crate::model::CoffeeDraft;
use crate::store::BlobStore;
use crate::view::{Filters, SortOrder};
use std::path::PathBuf;

pub struct CataApi<S: BlobStore> {
    journal: Journal<S>,
    insights: Box<dyn InsightProvider>,
    config_dir: PathBuf,
}

impl<S: BlobStore> CataApi<S> {
    pub fn new(store: S, insights: Box<dyn InsightProvider>, config_dir: PathBuf) -> Self {
        Self {
            journal: Journal::initialize(store),
            insights,
            config_dir,
        }
    }

    /// Warning from journal initialization, if recovery kicked in.
    pub fn load_warning(&self) -> Option<&str> {
        self.journal.load_warning()
    }

    pub fn create(&mut self, draft: CoffeeDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.journal, draft, self.insights.as_ref())
    }

    pub fn update(&mut self, needle: &str, draft: CoffeeDraft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.journal, needle, draft, self.insights.as_ref())
    }

    pub fn delete(&mut self, needle: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.journal, needle)
    }

    pub fn toggle_favorite(&mut self, needle: &str) -> Result<commands::CmdResult> {
        commands::favorite::run(&mut self.journal, needle)
    }

    pub fn import_archive(&mut self) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.journal)
    }

    pub fn list(&self, filters: &Filters, sort: SortOrder) -> Result<commands::CmdResult> {
        commands::list::run(&self.journal, filters, sort)
    }

    pub fn show(&self, needle: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.journal, needle)
    }

    pub fn facets(&self) -> Result<commands::CmdResult> {
        commands::facets::run(&self.journal)
    }

    pub fn share(&self, needle: &str) -> Result<commands::CmdResult> {
        commands::share::run(&self.journal, needle)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Existing record for prefilling an edit, if one matches.
    pub fn find(&self, needle: &str) -> Option<&crate::model::Coffee> {
        let id = self.journal.resolve_id(needle).ok()?;
        self.journal.get(&id)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
