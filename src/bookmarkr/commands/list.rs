use crate::commands::CmdResult;
use crate::error::{BookmarkrError, Result};
use crate::index::index_books;
use crate::model::{BookStatus, Genre, Library};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: BookStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = BookmarkrError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    pub status: StatusFilter,
    pub genre: Option<Genre>,
}

/// Books matching `filter`, indexed by their position in the full library so the
/// numbers shown can be used as selectors.
pub fn run(library: &Library, filter: LibraryFilter) -> Result<CmdResult> {
    let listed = index_books(&library.books)
        .into_iter()
        .filter(|dp| filter.status.matches(dp.book.status))
        .filter(|dp| filter.genre.is_none() || dp.book.genre == filter.genre)
        .collect();

    Ok(CmdResult::default().with_listed_books(listed))
}
