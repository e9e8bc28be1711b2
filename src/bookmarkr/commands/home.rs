use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_books, DisplayBook};
use crate::model::{BookStatus, Library};
use crate::stats::{library_summary, LibrarySummary};
use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingBook {
    #[serde(flatten)]
    pub entry: DisplayBook,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub greeting: &'static str,
    pub summary: LibrarySummary,
    pub reading: Vec<ReadingBook>,
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=21 => "Good evening",
        _ => "Good night",
    }
}

pub fn run(library: &Library, now: DateTime<Local>) -> Result<CmdResult> {
    let reading = index_books(&library.books)
        .into_iter()
        .filter(|dp| dp.book.status == BookStatus::Reading)
        .map(|entry| ReadingBook {
            percent: entry.book.progress_percent(),
            entry,
        })
        .collect();

    let home = HomeView {
        greeting: greeting(now.hour()),
        summary: library_summary(&library.books, &library.activity, now.date_naive()),
        reading,
    };
    Ok(CmdResult::default().with_home(home))
}
