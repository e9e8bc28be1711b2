use crate::catalog::CatalogEntry;
use crate::commands::{require_text, CmdMessage, CmdResult};
use crate::error::{BookmarkrError, Result};
use crate::model::{Book, BookStatus, Genre, Library};
use chrono::{DateTime, Local, Utc};

/// A book typed in by hand.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub total_pages: u32,
    pub current_page: u32,
    pub status: BookStatus,
    pub genre: Option<Genre>,
    pub cover_image: Option<String>,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>, total_pages: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            total_pages,
            ..Default::default()
        }
    }
}

/// Adds a manually entered book. No reading activity is credited for the starting page.
pub fn run(library: &mut Library, draft: BookDraft, now: DateTime<Local>) -> Result<CmdResult> {
    let title = require_text("title", &draft.title)?;
    let author = require_text("author", &draft.author)?;
    if draft.total_pages == 0 {
        return Err(BookmarkrError::InvalidInput(
            "total pages must be greater than zero".into(),
        ));
    }

    let mut book = Book::new(title, author, draft.total_pages, now.with_timezone(&Utc));
    book.current_page = draft.current_page.min(draft.total_pages);
    book.status = draft.status;
    book.genre = draft.genre;
    book.cover_image = draft.cover_image;

    if book.status == BookStatus::Finished {
        book.current_page = book.total_pages;
    }
    if book.current_page >= book.total_pages {
        book.mark_finished(now.with_timezone(&Utc));
    }

    Ok(push_book(library, book))
}

/// Adds a book picked from a catalog search.
pub fn from_catalog(
    library: &mut Library,
    entry: CatalogEntry,
    now: DateTime<Local>,
) -> Result<CmdResult> {
    let book = entry.into_book(now.with_timezone(&Utc));
    Ok(push_book(library, book))
}

fn push_book(library: &mut Library, book: Book) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added ({}): {} by {}",
        library.books.len() + 1,
        book.title,
        book.author
    )));
    library.books.push(book.clone());
    result.with_affected_books(vec![book])
}
