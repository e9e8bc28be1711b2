use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_book, BookSelector};
use crate::model::Library;
use chrono::{DateTime, Local};

pub fn run(
    library: &mut Library,
    selector: &BookSelector,
    new_page: u32,
    now: DateTime<Local>,
) -> Result<CmdResult> {
    let Library {
        books, activity, ..
    } = library;
    let pos = resolve_book(books, selector)?;
    let book = &mut books[pos];
    let was_finished = book.is_finished();

    let outcome = activity.record_progress(book, new_page, now);

    let mut result = CmdResult::default();
    if outcome.pages_credited > 0 {
        result.add_message(CmdMessage::success(format!(
            "{}: page {} of {} (+{} today)",
            book.title, outcome.current_page, book.total_pages, outcome.pages_credited
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{}: page {} of {}",
            book.title, outcome.current_page, book.total_pages
        )));
    }
    if outcome.completed && !was_finished {
        result.add_message(CmdMessage::success(format!("Finished {}!", book.title)));
    }

    let book = book.clone();
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookStatus;
    use crate::stats;
    use crate::store::memory::fixtures::LibraryFixture;
    use chrono::TimeZone;

    fn at(d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, d, 20, 0, 0).unwrap()
    }

    #[test]
    fn credits_today_and_keeps_ledger_in_sync() {
        let mut library = LibraryFixture::new().with_book("Dune", 400).library;
        let sel = BookSelector::Index(1);

        run(&mut library, &sel, 30, at(1)).unwrap();
        run(&mut library, &sel, 45, at(1)).unwrap();
        run(&mut library, &sel, 90, at(2)).unwrap();

        let day1 = at(1).date_naive();
        let day2 = at(2).date_naive();
        assert_eq!(library.activity.pages_on(day1), 45);
        assert_eq!(library.activity.pages_on(day2), 45);
        assert_eq!(library.books[0].reading_days.get(&day1), Some(&45));
        assert!(library.activity.discrepancies(&library.books).is_empty());
        assert_eq!(stats::streak(&library.activity, day2), 2);
    }

    #[test]
    fn regression_moves_page_without_credit() {
        let mut library = LibraryFixture::new()
            .with_book("Dune", 400)
            .read_last(100, at(1))
            .library;

        let result = run(&mut library, &BookSelector::Index(1), 60, at(2)).unwrap();

        assert_eq!(library.books[0].current_page, 60);
        assert_eq!(library.activity.pages_on(at(2).date_naive()), 0);
        assert_eq!(library.books[0].status, BookStatus::Reading);
        assert_eq!(result.affected_books[0].current_page, 60);
    }

    #[test]
    fn reaching_the_end_finishes_the_book() {
        let mut library = LibraryFixture::new()
            .with_book("Novella", 100)
            .read_last(80, at(1))
            .library;

        let result = run(&mut library, &BookSelector::Title("nov".into()), 150, at(2)).unwrap();

        let book = &library.books[0];
        assert!(book.is_finished());
        assert_eq!(book.current_page, 100);
        assert_eq!(library.activity.pages_on(at(2).date_naive()), 70);
        assert_eq!(result.affected_books[0].current_page, 100);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Finished Novella")));
    }

    #[test]
    fn unknown_book_is_an_error() {
        let mut library = LibraryFixture::new().with_book("Dune", 400).library;
        assert!(run(&mut library, &BookSelector::Index(4), 10, at(1)).is_err());
        assert!(run(&mut library, &BookSelector::Title("x".into()), 10, at(1)).is_err());
    }
}
