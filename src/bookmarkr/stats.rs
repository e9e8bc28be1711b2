//! # Statistics
//!
//! Derived numbers shown on the dashboard and stats views. Everything here is a pure
//! recomputation over the books and the [`ActivityLedger`]; nothing is cached, callers
//! simply invoke these again after each mutation.

use crate::ledger::ActivityLedger;
use crate::model::{Book, BookStatus, Genre};
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::Serialize;

/// Length of the rolling window, and the fixed divisor, of [`thirty_day_average`].
pub const AVERAGE_WINDOW_DAYS: u32 = 30;

/// Sum of pages read in the given calendar month.
pub fn monthly_pages(ledger: &ActivityLedger, year: i32, month: u32) -> u32 {
    ledger
        .iter()
        .filter(|(date, _)| date.year() == year && date.month() == month)
        .fold(0u32, |total, (_, pages)| total.saturating_add(pages))
}

/// Number of books finished (per their local finish date) during `year`.
pub fn yearly_finished_count(books: &[Book], year: i32) -> usize {
    books
        .iter()
        .filter(|b| b.status == BookStatus::Finished)
        .filter_map(|b| b.finished_date)
        .filter(|finished| finished.with_timezone(&Local).year() == year)
        .count()
}

/// Pages per day over the 30 days ending `today`.
///
/// The divisor is always 30, whether or not every day in the window had activity.
/// A window without any activity yields exactly 0.
pub fn thirty_day_average(ledger: &ActivityLedger, today: NaiveDate) -> u32 {
    let start = today
        .checked_sub_days(Days::new(u64::from(AVERAGE_WINDOW_DAYS - 1)))
        .unwrap_or(NaiveDate::MIN);

    let (total, active_days) = ledger
        .range(start, today)
        .fold((0u64, 0u32), |(total, days), (_, pages)| {
            (total + u64::from(pages), days + 1)
        });

    if active_days == 0 {
        return 0;
    }
    (total as f64 / f64::from(AVERAGE_WINDOW_DAYS)).round() as u32
}

/// Pages read across the library: full length of finished books, current page of
/// books in progress, nothing for want-to-read.
pub fn total_pages_across_library(books: &[Book]) -> u32 {
    books
        .iter()
        .map(|b| match b.status {
            BookStatus::Finished => b.total_pages,
            BookStatus::Reading => b.current_page,
            BookStatus::Want => 0,
        })
        .fold(0u32, u32::saturating_add)
}

/// Consecutive days with activity, walking backwards from `today`.
///
/// Stops at the first day without pages, so a quiet `today` means a streak of 0.
pub fn streak(ledger: &ActivityLedger, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = Some(today);

    while let Some(date) = cursor {
        if ledger.pages_on(date) == 0 {
            break;
        }
        streak += 1;
        cursor = date.pred_opt();
    }

    streak
}

/// One slice of the status breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: BookStatus,
    pub count: usize,
    /// Percentage of the library, rounded to one decimal.
    pub percent: f64,
}

/// Reading / finished / want counts with their share of the library.
///
/// Returns an empty list for an empty library.
pub fn status_breakdown(books: &[Book]) -> Vec<StatusShare> {
    let total = books.len();
    if total == 0 {
        return Vec::new();
    }

    BookStatus::ALL
        .iter()
        .map(|status| {
            let count = books.iter().filter(|b| b.status == *status).count();
            let percent = (count as f64 / total as f64 * 1000.0).round() / 10.0;
            StatusShare {
                status: *status,
                count,
                percent,
            }
        })
        .collect()
}

/// Book count per genre, in the fixed genre order.
pub fn genre_counts(books: &[Book]) -> Vec<(Genre, usize)> {
    Genre::ALL
        .iter()
        .map(|genre| {
            let count = books.iter().filter(|b| b.genre == Some(*genre)).count();
            (*genre, count)
        })
        .collect()
}

/// Headline numbers for the home dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibrarySummary {
    pub total_books: usize,
    pub finished_books: usize,
    pub total_pages: u32,
    pub streak: u32,
}

pub fn library_summary(
    books: &[Book],
    ledger: &ActivityLedger,
    today: NaiveDate,
) -> LibrarySummary {
    LibrarySummary {
        total_books: books.len(),
        finished_books: books.iter().filter(|b| b.is_finished()).count(),
        total_pages: total_pages_across_library(books),
        streak: streak(ledger, today),
    }
}

/// Everything the stats view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingStats {
    pub month_pages: u32,
    pub year_books: usize,
    pub average_pages: u32,
    pub breakdown: Vec<StatusShare>,
}

pub fn reading_stats(books: &[Book], ledger: &ActivityLedger, today: NaiveDate) -> ReadingStats {
    ReadingStats {
        month_pages: monthly_pages(ledger, today.year(), today.month()),
        year_books: yearly_finished_count(books, today.year()),
        average_pages: thirty_day_average(ledger, today),
        breakdown: status_breakdown(books),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_of(entries: &[(NaiveDate, u32)]) -> ActivityLedger {
        let mut book = Book::new("T".into(), "A".into(), 1000, Utc::now());
        for (date, pages) in entries {
            book.reading_days.insert(*date, *pages);
        }
        ActivityLedger::from_books([&book])
    }

    fn book_with(status: BookStatus, total: u32, current: u32) -> Book {
        let mut book = Book::new("T".into(), "A".into(), total, Utc::now());
        book.status = status;
        book.current_page = current;
        book
    }

    #[test]
    fn streak_counts_back_from_today() {
        let ledger = ledger_of(&[(day(2024, 1, 10), 5), (day(2024, 1, 9), 3)]);
        assert_eq!(streak(&ledger, day(2024, 1, 10)), 2);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let ledger = ledger_of(&[
            (day(2024, 1, 10), 5),
            (day(2024, 1, 9), 3),
            (day(2024, 1, 7), 30),
            (day(2024, 1, 6), 30),
        ]);
        assert_eq!(streak(&ledger, day(2024, 1, 10)), 2);
    }

    #[test]
    fn streak_is_zero_without_activity_today() {
        let ledger = ledger_of(&[(day(2024, 1, 9), 3)]);
        assert_eq!(streak(&ledger, day(2024, 1, 10)), 0);
    }

    #[test]
    fn streak_crosses_month_and_year_boundaries() {
        let ledger = ledger_of(&[
            (day(2024, 1, 1), 1),
            (day(2023, 12, 31), 1),
            (day(2023, 12, 30), 1),
        ]);
        assert_eq!(streak(&ledger, day(2024, 1, 1)), 3);
    }

    #[test]
    fn monthly_pages_sums_only_that_month() {
        let ledger = ledger_of(&[
            (day(2024, 3, 1), 10),
            (day(2024, 3, 15), 20),
            (day(2024, 4, 1), 5),
            (day(2023, 3, 2), 99),
        ]);
        assert_eq!(monthly_pages(&ledger, 2024, 3), 30);
        assert_eq!(monthly_pages(&ledger, 2024, 2), 0);
    }

    #[test]
    fn thirty_day_average_divides_by_thirty() {
        let ledger = ledger_of(&[(day(2024, 3, 30), 30), (day(2024, 3, 20), 15)]);
        // 45 / 30 = 1.5, rounds to 2
        assert_eq!(thirty_day_average(&ledger, day(2024, 3, 30)), 2);
    }

    #[test]
    fn thirty_day_average_window_edges() {
        let ledger = ledger_of(&[
            (day(2024, 3, 1), 300),  // today - 29: inside
            (day(2024, 2, 29), 900), // today - 30: outside
            (day(2024, 3, 31), 900), // future: outside
        ]);
        assert_eq!(thirty_day_average(&ledger, day(2024, 3, 30)), 10);
    }

    #[test]
    fn thirty_day_average_is_zero_without_activity() {
        let ledger = ledger_of(&[(day(2023, 1, 1), 100)]);
        assert_eq!(thirty_day_average(&ledger, day(2024, 3, 30)), 0);
        assert_eq!(thirty_day_average(&ActivityLedger::new(), day(2024, 3, 30)), 0);
    }

    #[test]
    fn total_pages_by_status() {
        let books = vec![
            book_with(BookStatus::Finished, 300, 120),
            book_with(BookStatus::Reading, 500, 42),
            book_with(BookStatus::Want, 250, 10),
        ];
        assert_eq!(total_pages_across_library(&books), 342);
    }

    #[test]
    fn yearly_finished_requires_status_and_date() {
        let mut done = book_with(BookStatus::Finished, 100, 100);
        done.finished_date = Some(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        let mut last_year = done.clone();
        last_year.finished_date = Some(Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap());
        let undated = book_with(BookStatus::Finished, 100, 100);
        let mut reopened = done.clone();
        reopened.status = BookStatus::Reading;

        let books = vec![done, last_year, undated, reopened];
        assert_eq!(yearly_finished_count(&books, 2024), 1);
        assert_eq!(yearly_finished_count(&books, 2023), 1);
    }

    #[test]
    fn breakdown_percentages() {
        let books = vec![
            book_with(BookStatus::Reading, 10, 0),
            book_with(BookStatus::Reading, 10, 0),
            book_with(BookStatus::Want, 10, 0),
        ];
        let shares = status_breakdown(&books);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].percent, 66.7);
        assert_eq!(shares[1].percent, 0.0);
        assert_eq!(shares[2].percent, 33.3);
        assert!(status_breakdown(&[]).is_empty());
    }

    #[test]
    fn genre_counts_cover_every_genre() {
        let mut a = book_with(BookStatus::Reading, 10, 0);
        a.genre = Some(Genre::History);
        let b = book_with(BookStatus::Reading, 10, 0);

        let counts = genre_counts(&[a, b]);
        assert_eq!(counts.len(), Genre::ALL.len());
        assert!(counts.contains(&(Genre::History, 1)));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 1);
    }

    #[test]
    fn page_sums_saturate() {
        let ledger = ledger_of(&[(day(2024, 3, 1), u32::MAX), (day(2024, 3, 2), 10)]);
        assert_eq!(monthly_pages(&ledger, 2024, 3), u32::MAX);

        let books = [
            book_with(BookStatus::Finished, u32::MAX, u32::MAX),
            book_with(BookStatus::Reading, 500, 200),
        ];
        assert_eq!(total_pages_across_library(&books), u32::MAX);
    }
}
