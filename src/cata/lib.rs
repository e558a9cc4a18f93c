//! # Cata Architecture
//!
//! Cata is a **UI-agnostic tasting-journal library**: a library that
//! happens to ship a CLI client, not a CLI with some library code.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Per-operation glue, returns CmdResult                    │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (journal.rs, view.rs, model.rs, insights.rs)          │
//! │  - Journal: canonical records, write-through persistence    │
//! │  - View engine: pure filter/sort/facet projections          │
//! │  - Insight provider: external text generation, may be absent│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract BlobStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, never writes to stdout/stderr, and never assumes
//! a terminal. The same core could serve a web UI or a REST API.
//!
//! ## Persistence Contract
//!
//! Every mutating journal operation writes the whole collection through
//! to the store before returning, so the durable state always matches
//! the last completed mutation. Recoverable storage conditions (corrupt
//! blob on load, failed save) degrade to warnings, never crashes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Per-operation glue producing [`commands::CmdResult`]
//! - [`journal`]: The record store
//! - [`view`]: Filter/sort projections and facet indexes
//! - [`model`]: Core data types (`Coffee`, `CoffeeDraft`)
//! - [`insights`]: The generative tasting-insight provider
//! - [`archive`]: The fixed 2021 historical dataset
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod archive;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod insights;
pub mod journal;
pub mod model;
pub mod store;
pub mod view;
