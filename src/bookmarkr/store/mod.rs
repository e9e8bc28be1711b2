//! # Storage Layer
//!
//! The whole reading state (books, quotes, activity ledger) is persisted as a single
//! [`Library`] value. The [`LibraryStore`] trait hides where it lives:
//!
//! - [`fs::FileStore`]: production storage, one `data.json` file in the data directory.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Write Semantics
//!
//! Saves are wholesale overwrites of the previous state. There is no schema version
//! and no partial update: the API layer loads the library, applies one user action,
//! and saves it back before anything else runs.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── data.json     # {"books": [...], "quotes": [...], "activity": {"2024-01-10": 42}}
//! └── config.json   # CLI configuration
//! ```
//!
//! Every top-level field of `data.json` is optional and defaults to empty.

use crate::error::Result;
use crate::model::Library;

pub mod fs;
pub mod memory;

/// Abstract interface for library persistence.
pub trait LibraryStore {
    /// Load the full library; a store with nothing saved yields an empty library.
    fn load(&self) -> Result<Library>;

    /// Replace the persisted library with `library`.
    fn save(&mut self, library: &Library) -> Result<()>;
}
