use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_book, BookSelector};
use crate::model::Library;

/// Removes a book and its share of the activity ledger. Its quotes stay behind.
pub fn run(library: &mut Library, selector: &BookSelector) -> Result<CmdResult> {
    let pos = resolve_book(&library.books, selector)?;
    let mut book = library.books.remove(pos);
    library.activity.remove_book(&mut book);

    let orphaned = library.quotes.iter().filter(|q| q.book_id == book.id).count();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted ({}): {}",
        pos + 1,
        book.title
    )));
    if orphaned > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} quote(s) kept without a book",
            orphaned
        )));
    }
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN_BOOK;
    use crate::store::memory::fixtures::LibraryFixture;
    use chrono::{Local, TimeZone};

    #[test]
    fn delete_repairs_the_ledger() {
        let day = Local.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let mut library = LibraryFixture::new()
            .with_book("Dune", 400)
            .read_last(30, day)
            .with_book("Emma", 400)
            .read_last(12, day)
            .library;

        run(&mut library, &BookSelector::Title("dune".into())).unwrap();

        assert_eq!(library.books.len(), 1);
        assert_eq!(library.activity.pages_on(day.date_naive()), 12);
        assert!(library.activity.discrepancies(&library.books).is_empty());

        run(&mut library, &BookSelector::Index(1)).unwrap();
        assert!(library.activity.is_empty());
    }

    #[test]
    fn quotes_outlive_their_book() {
        let mut library = LibraryFixture::new()
            .with_book("Dune", 400)
            .with_quote(0, "Fear is the mind-killer.")
            .library;

        let result = run(&mut library, &BookSelector::Index(1)).unwrap();

        assert_eq!(library.quotes.len(), 1);
        assert_eq!(library.quote_book_title(&library.quotes[0]), UNKNOWN_BOOK);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn missing_book_changes_nothing() {
        let mut library = LibraryFixture::new().with_book("Dune", 400).library;
        assert!(run(&mut library, &BookSelector::Index(2)).is_err());
        assert_eq!(library.books.len(), 1);
    }
}
