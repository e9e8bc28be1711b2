use crate::error::BookmarkrError;
use crate::ledger::ActivityLedger;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Title shown for quotes whose book has been deleted.
pub const UNKNOWN_BOOK: &str = "Unknown Book";

/// Pages credited to one book per calendar day.
pub type ReadingDays = BTreeMap<NaiveDate, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for QuoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for QuoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Reading,
    Finished,
    #[serde(rename = "want", alias = "want-to-read")]
    Want,
}

impl BookStatus {
    pub const ALL: [BookStatus; 3] = [BookStatus::Reading, BookStatus::Finished, BookStatus::Want];

    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Reading => "Reading",
            BookStatus::Finished => "Finished",
            BookStatus::Want => "Want to Read",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            BookStatus::Reading => "reading",
            BookStatus::Finished => "finished",
            BookStatus::Want => "want",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BookStatus {
    type Err = BookmarkrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reading" => Ok(BookStatus::Reading),
            "finished" | "done" => Ok(BookStatus::Finished),
            "want" | "want-to-read" | "want_to_read" => Ok(BookStatus::Want),
            other => Err(BookmarkrError::InvalidInput(format!(
                "unknown status '{}' (expected reading, finished or want)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Productivity,
    Psychology,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Finance,
    Business,
    Philosophy,
    Fiction,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    History,
    #[serde(rename = "Children's")]
    Childrens,
}

impl Genre {
    /// Display order used by the genres view and filters.
    pub const ALL: [Genre; 10] = [
        Genre::Productivity,
        Genre::Psychology,
        Genre::NonFiction,
        Genre::Finance,
        Genre::Business,
        Genre::Philosophy,
        Genre::Fiction,
        Genre::SelfHelp,
        Genre::History,
        Genre::Childrens,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Productivity => "Productivity",
            Genre::Psychology => "Psychology",
            Genre::NonFiction => "Non-Fiction",
            Genre::Finance => "Finance",
            Genre::Business => "Business",
            Genre::Philosophy => "Philosophy",
            Genre::Fiction => "Fiction",
            Genre::SelfHelp => "Self-Help",
            Genre::History => "History",
            Genre::Childrens => "Children's",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Genre::Productivity => "⚙️",
            Genre::Psychology => "🧠",
            Genre::NonFiction => "🌿",
            Genre::Finance => "💰",
            Genre::Business => "🏢",
            Genre::Philosophy => "🏛️",
            Genre::Fiction => "📖",
            Genre::SelfHelp => "💪",
            Genre::History => "📜",
            Genre::Childrens => "👶",
        }
    }
}

/// Emoji for an optional genre; books without one read as fiction.
pub fn genre_emoji(genre: Option<Genre>) -> &'static str {
    genre.unwrap_or(Genre::Fiction).emoji()
}

fn normalize_genre(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = BookmarkrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_genre(s);
        Genre::ALL
            .iter()
            .copied()
            .find(|g| normalize_genre(g.label()) == wanted)
            .ok_or_else(|| BookmarkrError::InvalidInput(format!("unknown genre '{}'", s)))
    }
}

// Older exports store an empty string when no genre was picked.
fn deserialize_genre<'de, D>(deserializer: D) -> Result<Option<Genre>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

fn deserialize_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPage {
        Number(u32),
        Text(String),
    }

    let raw: Option<RawPage> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPage::Number(n)) => Some(n),
        Some(RawPage::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default, deserialize_with = "deserialize_genre")]
    pub genre: Option<Genre>,
    pub added_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub reading_days: ReadingDays,
}

impl Book {
    pub fn new(title: String, author: String, total_pages: u32, added: DateTime<Utc>) -> Self {
        Self {
            id: BookId::new(),
            title,
            author,
            total_pages,
            current_page: 0,
            status: BookStatus::Reading,
            genre: None,
            added_date: added,
            finished_date: None,
            cover_image: None,
            reading_days: ReadingDays::new(),
        }
    }

    /// Share of the book read so far, 0.0 to 100.0.
    pub fn progress_percent(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        let current = self.current_page.min(self.total_pages);
        f64::from(current) / f64::from(self.total_pages) * 100.0
    }

    pub fn is_finished(&self) -> bool {
        self.status == BookStatus::Finished
    }

    /// Marks the book finished at `at`, replacing any earlier completion timestamp.
    pub fn mark_finished(&mut self, at: DateTime<Utc>) {
        self.status = BookStatus::Finished;
        self.finished_date = Some(at);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub book_id: BookId,
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_page")]
    pub page: Option<u32>,
    #[serde(default)]
    pub is_favorite: bool,
    pub added_date: DateTime<Utc>,
}

impl Quote {
    pub fn new(book_id: BookId, text: String, added: DateTime<Utc>) -> Self {
        Self {
            id: QuoteId::new(),
            book_id,
            text,
            page: None,
            is_favorite: false,
            added_date: added,
        }
    }
}

/// The whole persisted state: books, quotes and the activity ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub activity: ActivityLedger,
}

impl Library {
    pub fn find_book(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    /// Title of the quote's book, or [`UNKNOWN_BOOK`] if it no longer exists.
    pub fn quote_book_title(&self, quote: &Quote) -> &str {
        self.find_book(&quote.book_id)
            .map(|b| b.title.as_str())
            .unwrap_or(UNKNOWN_BOOK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_parses_loosely() {
        assert_eq!("self-help".parse::<Genre>().unwrap(), Genre::SelfHelp);
        assert_eq!("childrens".parse::<Genre>().unwrap(), Genre::Childrens);
        assert_eq!("Non Fiction".parse::<Genre>().unwrap(), Genre::NonFiction);
        assert!("poetry".parse::<Genre>().is_err());
    }

    #[test]
    fn status_accepts_long_want_form() {
        assert_eq!("want-to-read".parse::<BookStatus>().unwrap(), BookStatus::Want);
        assert_eq!("Reading".parse::<BookStatus>().unwrap(), BookStatus::Reading);
    }

    #[test]
    fn loads_legacy_browser_blob() {
        let json = r#"{
            "books": [{
                "id": "1704873600000",
                "title": "Dune",
                "author": "Frank Herbert",
                "totalPages": 412,
                "currentPage": 40,
                "status": "want",
                "addedDate": "2024-01-10T08:00:00.000Z",
                "genre": "",
                "coverImage": null
            }],
            "quotes": [{
                "id": "1704873600001",
                "bookId": "1704873600000",
                "text": "Fear is the mind-killer.",
                "page": "8",
                "isFavorite": true,
                "addedDate": "2024-01-10T08:05:00.000Z"
            }]
        }"#;

        let lib: Library = serde_json::from_str(json).unwrap();
        assert_eq!(lib.books[0].status, BookStatus::Want);
        assert_eq!(lib.books[0].genre, None);
        assert!(lib.books[0].reading_days.is_empty());
        assert_eq!(lib.quotes[0].page, Some(8));
        assert!(lib.activity.is_empty());
    }

    #[test]
    fn persists_camel_case_fields() {
        let mut book = Book::new("Dune".into(), "Herbert".into(), 412, Utc::now());
        book.genre = Some(Genre::SelfHelp);
        book.reading_days
            .insert(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 12);

        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"totalPages\":412"));
        assert!(json.contains("\"genre\":\"Self-Help\""));
        assert!(json.contains("\"readingDays\":{\"2024-03-01\":12}"));
        assert!(json.contains("\"status\":\"reading\""));
    }

    #[test]
    fn dangling_quote_resolves_to_placeholder() {
        let lib = Library::default();
        let quote = Quote::new(BookId::from("gone"), "text".into(), Utc::now());
        assert_eq!(lib.quote_book_title(&quote), UNKNOWN_BOOK);
    }

    #[test]
    fn progress_percent_clamps_and_handles_zero() {
        let mut book = Book::new("A".into(), "B".into(), 200, Utc::now());
        book.current_page = 50;
        assert_eq!(book.progress_percent(), 25.0);
        book.current_page = 300;
        assert_eq!(book.progress_percent(), 100.0);
        book.total_pages = 0;
        assert_eq!(book.progress_percent(), 0.0);
    }
}
