//! # Bookmarkr Architecture
//!
//! Bookmarkr is a **UI-agnostic reading tracker library**: books and their progress,
//! quotes, and a per-day ledger of pages read, with the statistics derived from them.
//! The terminal client is one thin consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, terminal I/O        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One load → command → save transaction per action         │
//! │  - Normalizes inputs (selector words → BookSelector)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over an explicit `Library` value     │
//! │  - Ledger, stats and calendar logic live beside it          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract LibraryStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Ledger Invariant
//!
//! The activity ledger and each book's reading days always agree: for every date,
//! the ledger total is the sum of what the books were credited that day. Only
//! [`ledger::ActivityLedger`] mutates either side. See `ledger.rs`.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward code never writes to stdout/stderr and never exits the process.
//! The one network path is the [`catalog::BookCatalog`] collaborator, passed in by the
//! caller.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `Quote`, `Library`)
//! - [`ledger`]: Reading activity ledger and its consistency rules
//! - [`stats`]: Streak, averages and other derived numbers
//! - [`calendar`]: Month grid and per-day breakdown
//! - [`index`]: Display indexes and book selectors
//! - [`catalog`]: Book search against Google Books
//! - [`cover`]: Cover image references
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod calendar;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod cover;
pub mod error;
pub mod index;
pub mod ledger;
pub mod model;
pub mod stats;
pub mod store;
