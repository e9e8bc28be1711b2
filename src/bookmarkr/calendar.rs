use crate::error::{BookmarkrError, Result};
use crate::ledger::ActivityLedger;
use crate::model::{Book, BookId};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const MEDIUM_THRESHOLD: u32 = 50;
const HEAVY_THRESHOLD: u32 = 100;

/// How busy a calendar day was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    None,
    Light,
    Medium,
    Heavy,
}

impl ActivityLevel {
    pub fn for_pages(pages: u32) -> Self {
        match pages {
            0 => ActivityLevel::None,
            p if p < MEDIUM_THRESHOLD => ActivityLevel::Light,
            p if p < HEAVY_THRESHOLD => ActivityLevel::Medium,
            _ => ActivityLevel::Heavy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub pages: u32,
    pub level: ActivityLevel,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st, with weeks starting on Sunday.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    pub fn build(
        ledger: &ActivityLedger,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            BookmarkrError::InvalidInput(format!("invalid month {}-{:02}", year, month))
        })?;

        let days = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| {
                let pages = ledger.pages_on(date);
                CalendarDay {
                    date,
                    day: date.day(),
                    pages,
                    level: ActivityLevel::for_pages(pages),
                    is_today: date == today,
                }
            })
            .collect();

        Ok(Self {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        })
    }

    pub fn total_pages(&self) -> u32 {
        self.days
            .iter()
            .fold(0u32, |total, d| total.saturating_add(d.pages))
    }

    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|d| d.pages > 0).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDay {
    pub book_id: BookId,
    pub title: String,
    pub pages: u32,
}

/// Reading done on a single day, broken down per book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetails {
    pub date: NaiveDate,
    pub total: u32,
    pub books: Vec<BookDay>,
}

/// Details for `date`, or `None` when nothing was read that day.
pub fn day_details(
    books: &[Book],
    ledger: &ActivityLedger,
    date: NaiveDate,
) -> Option<DayDetails> {
    let total = ledger.pages_on(date);
    if total == 0 {
        return None;
    }

    let books = books
        .iter()
        .filter_map(|b| {
            b.reading_days
                .get(&date)
                .filter(|pages| **pages > 0)
                .map(|pages| BookDay {
                    book_id: b.id.clone(),
                    title: b.title.clone(),
                    pages: *pages,
                })
        })
        .collect();

    Some(DayDetails { date, total, books })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn levels_follow_thresholds() {
        assert_eq!(ActivityLevel::for_pages(0), ActivityLevel::None);
        assert_eq!(ActivityLevel::for_pages(49), ActivityLevel::Light);
        assert_eq!(ActivityLevel::for_pages(50), ActivityLevel::Medium);
        assert_eq!(ActivityLevel::for_pages(99), ActivityLevel::Medium);
        assert_eq!(ActivityLevel::for_pages(100), ActivityLevel::Heavy);
    }

    #[test]
    fn builds_leap_february() {
        let ledger = ActivityLedger::new();
        let month = CalendarMonth::build(&ledger, 2024, 2, day(2024, 2, 14)).unwrap();

        assert_eq!(month.days.len(), 29);
        // 2024-02-01 was a Thursday
        assert_eq!(month.leading_blanks, 4);
        assert!(month.days[13].is_today);
        assert_eq!(month.days.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(CalendarMonth::build(&ActivityLedger::new(), 2024, 13, day(2024, 1, 1)).is_err());
    }

    #[test]
    fn day_details_lists_contributing_books() {
        let mut ledger = ActivityLedger::new();
        let mut a = Book::new("Dune".into(), "Herbert".into(), 400, Utc::now());
        let mut b = Book::new("Emma".into(), "Austen".into(), 400, Utc::now());
        let c = Book::new("Idle".into(), "Nobody".into(), 400, Utc::now());
        let noon = Local.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
        ledger.record_progress(&mut a, 30, noon);
        ledger.record_progress(&mut b, 70, noon);

        let details = day_details(&[a, b, c], &ledger, day(2024, 5, 4)).unwrap();
        assert_eq!(details.total, 100);
        assert_eq!(details.books.len(), 2);
        assert_eq!(details.books[1].title, "Emma");
        assert_eq!(details.books[1].pages, 70);

        assert!(day_details(&[], &ledger, day(2024, 5, 5)).is_none());

        let month = CalendarMonth::build(&ledger, 2024, 5, day(2024, 5, 31)).unwrap();
        assert_eq!(month.total_pages(), 100);
        assert_eq!(month.active_days(), 1);
        assert_eq!(month.days[3].level, ActivityLevel::Heavy);
    }
}
