//! # Activity Ledger
//!
//! The ledger maps a calendar day to the number of pages read that day across the
//! whole library. Every book carries its own share of those pages in
//! [`Book::reading_days`], and the two must always agree:
//!
//! ```text
//! ledger[date] == Σ book.reading_days[date]   for every date in the ledger
//! ```
//!
//! The ledger is never written directly. It only changes through
//! [`ActivityLedger::record_progress`] (credit a book and the ledger by the same delta)
//! and [`ActivityLedger::remove_book`] (subtract a deleted book's contribution and prune
//! days that reach zero). [`ActivityLedger::rebuild`] recomputes it from the books and
//! backs the `doctor` command.

use crate::model::Book;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLedger {
    days: BTreeMap<NaiveDate, u32>,
}

/// What a progress update did to the ledger and the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOutcome {
    pub previous_page: u32,
    pub current_page: u32,
    /// Pages credited today; zero for regressions and no-op updates.
    pub pages_credited: u32,
    /// True when this update took the book to its last page.
    pub completed: bool,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages_on(&self, date: NaiveDate) -> u32 {
        self.days.get(&date).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.days.iter().map(|(d, p)| (*d, *p))
    }

    /// Entries whose date falls in `[from, to]`.
    pub fn range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.days.range(from..=to).map(|(d, p)| (*d, *p))
    }

    fn credit(&mut self, date: NaiveDate, pages: u32) {
        let total = self.days.entry(date).or_insert(0);
        *total = total.saturating_add(pages);
    }

    /// Moves `book` to `new_page`, crediting forward progress to today.
    ///
    /// Credit is the difference to the page as entered, even past the last page; the
    /// stored page is clamped to the book's length. Reaching the last page finishes the
    /// book and stamps the finish time, again on every later completion. Going backwards
    /// updates the page but never takes credit away.
    pub fn record_progress(
        &mut self,
        book: &mut Book,
        new_page: u32,
        now: DateTime<Local>,
    ) -> ProgressOutcome {
        let previous_page = book.current_page;
        let clamped = new_page.min(book.total_pages);
        let delta = new_page.saturating_sub(previous_page);

        if delta > 0 {
            let today = now.date_naive();
            self.credit(today, delta);
            let share = book.reading_days.entry(today).or_insert(0);
            *share = share.saturating_add(delta);
        }

        book.current_page = clamped;

        let completed = book.total_pages > 0 && new_page >= book.total_pages;
        if completed {
            book.mark_finished(now.with_timezone(&Utc));
        }

        ProgressOutcome {
            previous_page,
            current_page: clamped,
            pages_credited: delta,
            completed,
        }
    }

    /// Subtracts every day `book` was credited with, dropping days that reach zero.
    ///
    /// The book's reading days are drained as they are subtracted, so a second call
    /// with the same book has nothing left to take. Days missing from the ledger are
    /// skipped.
    pub fn remove_book(&mut self, book: &mut Book) {
        for (date, pages) in std::mem::take(&mut book.reading_days) {
            if let Some(total) = self.days.get_mut(&date) {
                *total = total.saturating_sub(pages);
                if *total == 0 {
                    self.days.remove(&date);
                }
            }
        }
    }

    /// Per-day sums of all books' reading days.
    pub fn from_books<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        let mut ledger = Self::new();
        for book in books {
            for (date, pages) in &book.reading_days {
                if *pages > 0 {
                    ledger.credit(*date, *pages);
                }
            }
        }
        ledger
    }

    /// Dates where this ledger disagrees with the books' reading days.
    pub fn discrepancies(&self, books: &[Book]) -> Vec<LedgerDiscrepancy> {
        let expected = Self::from_books(books);
        let mut dates: Vec<NaiveDate> = self
            .days
            .keys()
            .chain(expected.days.keys())
            .copied()
            .collect();
        dates.sort();
        dates.dedup();

        dates
            .into_iter()
            .filter_map(|date| {
                let recorded = self.pages_on(date);
                let attributed = expected.pages_on(date);
                (recorded != attributed).then_some(LedgerDiscrepancy {
                    date,
                    recorded,
                    attributed,
                })
            })
            .collect()
    }

    /// Replaces the ledger with the sums of the books' reading days.
    pub fn rebuild(&mut self, books: &[Book]) {
        *self = Self::from_books(books);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerDiscrepancy {
    pub date: NaiveDate,
    pub recorded: u32,
    pub attributed: u32,
}
