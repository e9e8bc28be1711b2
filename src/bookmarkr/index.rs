//! # Display Indexes
//!
//! Books and quotes are stored with stable string ids, which are unpleasant to type.
//! The CLI (and any other UI) refers to them by a 1-based display index instead:
//!
//! ```text
//! 1. Dune            (books, in library order)
//! 2. Emma
//!
//! 1. "Fear is the mind-killer."   (quotes, in the order they were added)
//! ```
//!
//! Books can also be selected by a title fragment, as long as it matches exactly one
//! book. Indexes are recomputed on every call, so they shift after a deletion; the ids
//! never do.

use crate::error::{BookmarkrError, Result};
use crate::model::{Book, Library, Quote};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayBook {
    pub index: usize,
    pub book: Book,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayQuote {
    pub index: usize,
    pub quote: Quote,
    /// Resolved title, or the unknown-book placeholder.
    pub book_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSelector {
    Index(usize),
    Title(String),
}

impl fmt::Display for BookSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSelector::Index(n) => write!(f, "{}", n),
            BookSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for BookSelector {
    type Err = BookmarkrError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BookmarkrError::InvalidInput("empty book selector".into()));
        }
        Ok(match s.parse::<usize>() {
            Ok(n) => BookSelector::Index(n),
            Err(_) => BookSelector::Title(s.to_string()),
        })
    }
}

/// Builds a selector from raw words: a lone number is an index, anything else is
/// joined into one title fragment.
pub fn parse_selector<I: AsRef<str>>(inputs: &[I]) -> Result<BookSelector> {
    let joined = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    joined.parse()
}

pub fn index_books(books: &[Book]) -> Vec<DisplayBook> {
    books
        .iter()
        .enumerate()
        .map(|(i, book)| DisplayBook {
            index: i + 1,
            book: book.clone(),
        })
        .collect()
}

pub fn index_quotes(library: &Library) -> Vec<DisplayQuote> {
    library
        .quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| DisplayQuote {
            index: i + 1,
            book_title: library.quote_book_title(quote).to_string(),
            quote: quote.clone(),
        })
        .collect()
}

/// Position in `books` of the single book matching `selector`.
pub fn resolve_book(books: &[Book], selector: &BookSelector) -> Result<usize> {
    match selector {
        BookSelector::Index(n) => {
            if *n >= 1 && *n <= books.len() {
                Ok(n - 1)
            } else {
                Err(BookmarkrError::BookNotFound(format!("index {}", n)))
            }
        }
        BookSelector::Title(term) => {
            let term_lower = term.to_lowercase();
            let matches: Vec<usize> = books
                .iter()
                .enumerate()
                .filter(|(_, b)| b.title.to_lowercase().contains(&term_lower))
                .map(|(i, _)| i)
                .collect();

            // An exact title wins over several partial matches.
            if let Some(exact) = matches
                .iter()
                .find(|i| books[**i].title.to_lowercase() == term_lower)
            {
                return Ok(*exact);
            }

            match matches.as_slice() {
                [only] => Ok(*only),
                [] => Err(BookmarkrError::BookNotFound(format!("\"{}\"", term))),
                _ => Err(BookmarkrError::AmbiguousSelector(term.clone())),
            }
        }
    }
}

/// Position in `quotes` of the quote shown at display index `n`.
pub fn resolve_quote(quotes: &[Quote], n: usize) -> Result<usize> {
    if n >= 1 && n <= quotes.len() {
        Ok(n - 1)
    } else {
        Err(BookmarkrError::QuoteNotFound(format!("index {}", n)))
    }
}
