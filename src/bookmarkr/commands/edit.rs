use crate::commands::{require_text, CmdMessage, CmdResult};
use crate::error::{BookmarkrError, Result};
use crate::index::{resolve_book, BookSelector};
use crate::model::{BookStatus, Genre, Library};
use chrono::{DateTime, Local, Utc};

/// Changes to apply to a book. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
    pub status: Option<BookStatus>,
    /// `Some(None)` clears the genre.
    pub genre: Option<Option<Genre>>,
    pub cover_image: Option<String>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.total_pages.is_none()
            && self.current_page.is_none()
            && self.status.is_none()
            && self.genre.is_none()
            && self.cover_image.is_none()
    }
}

pub fn run(
    library: &mut Library,
    selector: &BookSelector,
    patch: BookPatch,
    now: DateTime<Local>,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(BookmarkrError::InvalidInput("nothing to change".into()));
    }
    if patch.total_pages == Some(0) {
        return Err(BookmarkrError::InvalidInput(
            "total pages must be greater than zero".into(),
        ));
    }
    let title = patch
        .title
        .as_deref()
        .map(|t| require_text("title", t))
        .transpose()?;
    let author = patch
        .author
        .as_deref()
        .map(|a| require_text("author", a))
        .transpose()?;

    let Library {
        books, activity, ..
    } = library;
    let pos = resolve_book(books, selector)?;
    let book = &mut books[pos];

    if let Some(title) = title {
        book.title = title;
    }
    if let Some(author) = author {
        book.author = author;
    }
    if let Some(total) = patch.total_pages {
        book.total_pages = total;
        book.current_page = book.current_page.min(total);
    }
    if let Some(genre) = patch.genre {
        book.genre = genre;
    }
    if let Some(cover) = patch.cover_image {
        book.cover_image = Some(cover);
    }
    if let Some(status) = patch.status {
        book.status = status;
    }

    let mut result = CmdResult::default();
    if let Some(page) = patch.current_page {
        let outcome = activity.record_progress(book, page, now);
        if outcome.pages_credited > 0 {
            result.add_message(CmdMessage::info(format!(
                "+{} pages today",
                outcome.pages_credited
            )));
        }
    }

    let stamp = now.with_timezone(&Utc);
    if book.current_page >= book.total_pages {
        book.status = BookStatus::Finished;
    }
    if book.status == BookStatus::Finished {
        book.finished_date.get_or_insert(stamp);
    } else {
        book.finished_date = None;
    }

    result.add_message(CmdMessage::success(format!(
        "Updated ({}): {}",
        pos + 1,
        book.title
    )));
    let book = book.clone();
    Ok(result.with_affected_books(vec![book]))
}
