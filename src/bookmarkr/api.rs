//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every bookmarkr operation, whatever UI is in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the transaction**: each mutating call loads the [`Library`], runs exactly one
//!   command against it and saves it back. A failed command saves nothing.
//! - **Normalizes inputs** (e.g. raw selector words into a [`BookSelector`])
//! - **Supplies the clock**, so commands stay deterministic under test
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O to the terminal**: no stdout, stderr, or formatting
//!
//! ## Generic Over LibraryStore
//!
//! `BookmarkrApi<S: LibraryStore>`:
//! - Production: `BookmarkrApi<FileStore>`
//! - Testing: `BookmarkrApi<InMemoryStore>`

use crate::catalog::BookCatalog;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::index::{parse_selector, BookSelector};
use crate::model::Library;
use crate::store::LibraryStore;
use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info};

pub struct BookmarkrApi<S: LibraryStore> {
    store: S,
    paths: commands::BookmarkrPaths,
    clock: fn() -> DateTime<Local>,
}

impl<S: LibraryStore> BookmarkrApi<S> {
    pub fn new(store: S, paths: commands::BookmarkrPaths) -> Self {
        Self {
            store,
            paths,
            clock: Local::now,
        }
    }

    /// Replaces the wall clock, for tests.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &commands::BookmarkrPaths {
        &self.paths
    }

    pub fn now(&self) -> DateTime<Local> {
        (self.clock)()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn read<F>(&self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&Library) -> Result<CmdResult>,
    {
        let library = self.store.load()?;
        op(&library)
    }

    fn mutate<F>(&mut self, action: &str, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut Library) -> Result<CmdResult>,
    {
        let mut library = self.store.load()?;
        let result = op(&mut library)?;
        self.store.save(&library)?;
        info!(action, books = library.books.len(), "library updated");
        Ok(result)
    }

    pub fn add_book(&mut self, draft: commands::add::BookDraft) -> Result<CmdResult> {
        let now = self.now();
        self.mutate("add", |lib| commands::add::run(lib, draft, now))
    }

    pub fn search_catalog<C: BookCatalog>(&self, catalog: &C, query: &str) -> Result<CmdResult> {
        debug!(query, "catalog search");
        commands::search::run(catalog, query)
    }

    /// Searches the catalog and adds the `pick`th (1-based) result.
    pub fn add_from_catalog<C: BookCatalog>(
        &mut self,
        catalog: &C,
        query: &str,
        pick: usize,
    ) -> Result<CmdResult> {
        let entry = commands::search::pick(catalog, query, pick)?;
        let now = self.now();
        self.mutate("add", |lib| commands::add::from_catalog(lib, entry, now))
    }

    pub fn update_progress<I: AsRef<str>>(
        &mut self,
        book: &[I],
        new_page: u32,
    ) -> Result<CmdResult> {
        let selector = parse_selector(book)?;
        let now = self.now();
        self.mutate("progress", |lib| {
            commands::progress::run(lib, &selector, new_page, now)
        })
    }

    pub fn edit_book<I: AsRef<str>>(
        &mut self,
        book: &[I],
        patch: commands::edit::BookPatch,
    ) -> Result<CmdResult> {
        let selector = parse_selector(book)?;
        let now = self.now();
        self.mutate("edit", |lib| commands::edit::run(lib, &selector, patch, now))
    }

    pub fn delete_book<I: AsRef<str>>(&mut self, book: &[I]) -> Result<CmdResult> {
        let selector = parse_selector(book)?;
        self.mutate("delete", |lib| commands::delete::run(lib, &selector))
    }

    pub fn list_books(&self, filter: commands::list::LibraryFilter) -> Result<CmdResult> {
        self.read(|lib| commands::list::run(lib, filter))
    }

    pub fn genres(&self) -> Result<CmdResult> {
        self.read(commands::genres::run)
    }

    pub fn add_quote(
        &mut self,
        book: BookSelector,
        text: String,
        page: Option<u32>,
        favorite: bool,
    ) -> Result<CmdResult> {
        let draft = commands::quotes::QuoteDraft {
            book,
            text,
            page,
            favorite,
        };
        let now = self.now();
        self.mutate("quote add", |lib| commands::quotes::add(lib, draft, now))
    }

    pub fn list_quotes(&self, filter: commands::quotes::QuoteFilter) -> Result<CmdResult> {
        self.read(|lib| commands::quotes::list(lib, filter))
    }

    pub fn toggle_favorite(&mut self, index: usize) -> Result<CmdResult> {
        self.mutate("quote fav", |lib| {
            commands::quotes::toggle_favorite(lib, index)
        })
    }

    pub fn delete_quote(&mut self, index: usize) -> Result<CmdResult> {
        self.mutate("quote delete", |lib| commands::quotes::delete(lib, index))
    }

    pub fn home(&self) -> Result<CmdResult> {
        let now = self.now();
        self.read(|lib| commands::home::run(lib, now))
    }

    pub fn stats(&self) -> Result<CmdResult> {
        let today = self.today();
        self.read(|lib| commands::stats::run(lib, today))
    }

    /// Calendar for `year`/`month`, defaulting to the current month.
    pub fn calendar(&self, year: Option<i32>, month: Option<u32>) -> Result<CmdResult> {
        use chrono::Datelike;
        let today = self.today();
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.month());
        self.read(|lib| commands::calendar::month(lib, year, month, today))
    }

    pub fn day(&self, date: Option<NaiveDate>) -> Result<CmdResult> {
        let date = date.unwrap_or_else(|| self.today());
        self.read(|lib| commands::calendar::day(lib, date))
    }

    pub fn doctor(&mut self) -> Result<CmdResult> {
        self.mutate("doctor", commands::doctor::run)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}
