use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Library;
use crate::stats::reading_stats;
use chrono::NaiveDate;

pub fn run(library: &Library, today: NaiveDate) -> Result<CmdResult> {
    let stats = reading_stats(&library.books, &library.activity, today);
    Ok(CmdResult::default().with_stats(stats))
}
