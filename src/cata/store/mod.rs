//! # Storage Layer
//!
//! The journal persists through the [`BlobStore`] trait: a tiny key/value
//! contract over opaque text blobs. The journal owns the serialization
//! format; the store only moves strings in and out of durable storage.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the journal
//! - Keep the record semantics **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per key under the
//!   data directory (`coffees.json`, `archive_2021.json`)
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! ## Keys
//!
//! Two logical keys are in use: [`LOGS_KEY`] holds the full record
//! collection as a JSON array, [`ARCHIVE_FLAG_KEY`] is the one-bit
//! "historical import completed" marker.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the full record collection is stored.
pub const LOGS_KEY: &str = "coffees";

/// Key for the "2021 archive already imported" flag.
pub const ARCHIVE_FLAG_KEY: &str = "archive_2021";

/// Abstract key/value interface over durable local storage.
pub trait BlobStore {
    /// Load the blob stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Whether a blob exists under `key`.
    fn exists(&self, key: &str) -> bool;
}
