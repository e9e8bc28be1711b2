use crate::calendar::{day_details, CalendarMonth};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Library;
use chrono::NaiveDate;

pub fn month(library: &Library, year: i32, month: u32, today: NaiveDate) -> Result<CmdResult> {
    let calendar = CalendarMonth::build(&library.activity, year, month, today)?;
    Ok(CmdResult::default().with_calendar(calendar))
}

pub fn day(library: &Library, date: NaiveDate) -> Result<CmdResult> {
    match day_details(&library.books, &library.activity, date) {
        Some(details) => Ok(CmdResult::default().with_day(details)),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "No reading activity on {}",
                date.format("%B %-d, %Y")
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LibraryFixture;
    use chrono::{Local, TimeZone};

    #[test]
    fn month_grid_reflects_ledger() {
        let at = Local.with_ymd_and_hms(2024, 9, 3, 21, 0, 0).unwrap();
        let library = LibraryFixture::new()
            .with_book("Dune", 400)
            .read_last(120, at)
            .library;

        let cal = month(&library, 2024, 9, at.date_naive())
            .unwrap()
            .calendar
            .unwrap();
        // 2024-09-01 was a Sunday
        assert_eq!(cal.leading_blanks, 0);
        assert_eq!(cal.days.len(), 30);
        assert_eq!(cal.days[2].pages, 120);
        assert!(cal.days[2].is_today);
    }

    #[test]
    fn quiet_day_reports_no_activity() {
        let library = LibraryFixture::new().with_book("Dune", 400).library;
        let date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();

        let result = day(&library, date).unwrap();
        assert!(result.day.is_none());
        assert_eq!(
            result.messages[0].content,
            "No reading activity on September 4, 2024"
        );
    }
}
