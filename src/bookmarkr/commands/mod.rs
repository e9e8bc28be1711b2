use crate::calendar::{CalendarMonth, DayDetails};
use crate::catalog::CatalogEntry;
use crate::config::BookmarkrConfig;
use crate::error::{BookmarkrError, Result};
use crate::index::{DisplayBook, DisplayQuote};
use crate::model::Book;
use crate::stats::ReadingStats;
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod calendar;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod genres;
pub mod home;
pub mod list;
pub mod progress;
pub mod quotes;
pub mod search;
pub mod stats;

#[derive(Debug, Clone)]
pub struct BookmarkrPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    pub listed_quotes: Vec<DisplayQuote>,
    pub home: Option<home::HomeView>,
    pub stats: Option<ReadingStats>,
    pub genres: Vec<genres::GenreCount>,
    pub calendar: Option<CalendarMonth>,
    pub day: Option<DayDetails>,
    pub catalog_results: Vec<CatalogEntry>,
    pub config: Option<BookmarkrConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<DisplayQuote>) -> Self {
        self.listed_quotes = quotes;
        self
    }

    pub fn with_home(mut self, home: home::HomeView) -> Self {
        self.home = Some(home);
        self
    }

    pub fn with_stats(mut self, stats: ReadingStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_genres(mut self, genres: Vec<genres::GenreCount>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_calendar(mut self, calendar: CalendarMonth) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn with_day(mut self, day: DayDetails) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_catalog_results(mut self, results: Vec<CatalogEntry>) -> Self {
        self.catalog_results = results;
        self
    }

    pub fn with_config(mut self, config: BookmarkrConfig) -> Self {
        self.config = Some(config);
        self
    }
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookmarkrError::InvalidInput(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(value.to_string())
}
