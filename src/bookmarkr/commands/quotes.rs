use crate::commands::{require_text, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_quotes, resolve_book, resolve_quote, BookSelector};
use crate::model::{Library, Quote};
use chrono::{DateTime, Local, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteFilter {
    #[default]
    All,
    Favorites,
}

#[derive(Debug, Clone)]
pub struct QuoteDraft {
    pub book: BookSelector,
    pub text: String,
    pub page: Option<u32>,
    pub favorite: bool,
}

pub fn add(library: &mut Library, draft: QuoteDraft, now: DateTime<Local>) -> Result<CmdResult> {
    let text = require_text("quote", &draft.text)?;
    let pos = resolve_book(&library.books, &draft.book)?;
    let book = &library.books[pos];

    let mut quote = Quote::new(book.id.clone(), text, now.with_timezone(&Utc));
    quote.page = draft.page;
    quote.is_favorite = draft.favorite;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved quote ({}) from {}",
        library.quotes.len() + 1,
        book.title
    )));
    library.quotes.push(quote);
    Ok(result)
}

pub fn list(library: &Library, filter: QuoteFilter) -> Result<CmdResult> {
    let listed = index_quotes(library)
        .into_iter()
        .filter(|dq| filter == QuoteFilter::All || dq.quote.is_favorite)
        .collect();
    Ok(CmdResult::default().with_listed_quotes(listed))
}

pub fn toggle_favorite(library: &mut Library, index: usize) -> Result<CmdResult> {
    let pos = resolve_quote(&library.quotes, index)?;
    let quote = &mut library.quotes[pos];
    quote.is_favorite = !quote.is_favorite;

    let mut result = CmdResult::default();
    let verb = if quote.is_favorite {
        "Favorited"
    } else {
        "Unfavorited"
    };
    result.add_message(CmdMessage::success(format!("{} quote {}", verb, index)));
    Ok(result)
}

pub fn delete(library: &mut Library, index: usize) -> Result<CmdResult> {
    let pos = resolve_quote(&library.quotes, index)?;
    library.quotes.remove(pos);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted quote {}", index)));
    Ok(result)
}
