//! # Rendering Module
//!
//! Styled terminal output. Each `render_*` function turns a command result into
//! template data and renders it with minijinja; the `style` filter maps style names
//! from [`super::styles`] onto `console` styles.
//!
//! Layout calculations (width, truncation, padding, bars) stay in Rust because they need
//! Unicode-aware processing. Templates only arrange the pieces and pick styles.

use super::styles::{self, names};
use super::templates::{
    BOOK_LIST_TEMPLATE, CALENDAR_TEMPLATE, CATALOG_TEMPLATE, DAY_TEMPLATE, GENRES_TEMPLATE,
    HOME_TEMPLATE, MESSAGES_TEMPLATE, QUOTES_TEMPLATE, STATS_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use bookmarkr::calendar::{ActivityLevel, CalendarMonth, DayDetails};
use bookmarkr::catalog::{CatalogEntry, DEFAULT_PAGE_COUNT};
use bookmarkr::commands::genres::GenreCount;
use bookmarkr::commands::home::HomeView;
use bookmarkr::commands::{CmdMessage, MessageLevel};
use bookmarkr::index::{DisplayBook, DisplayQuote};
use bookmarkr::model::{genre_emoji, BookStatus};
use bookmarkr::stats::ReadingStats;
use chrono::{DateTime, NaiveDate, Utc};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const TITLE_WIDTH: usize = 36;
pub const AUTHOR_WIDTH: usize = 22;
pub const STATUS_WIDTH: usize = 12;
pub const TIME_WIDTH: usize = 14;
pub const BAR_WIDTH: usize = 20;

const WEEKDAYS: &str = "Su Mo Tu We Th Fr Sa";

fn color_enabled(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(console::colors_enabled)
}

fn render<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

#[derive(Serialize)]
struct BookLine {
    index: String,
    emoji: &'static str,
    title: String,
    author: String,
    status: String,
    status_style: &'static str,
    progress: String,
    added: String,
}

#[derive(Serialize)]
struct BookListData {
    books: Vec<BookLine>,
    empty_message: &'static str,
}

fn status_style(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Reading => names::READING,
        BookStatus::Finished => names::FINISHED,
        BookStatus::Want => names::WANT,
    }
}

pub fn render_book_list(books: &[DisplayBook]) -> String {
    render_book_list_internal(books, Utc::now(), None)
}

fn render_book_list_internal(
    books: &[DisplayBook],
    now: DateTime<Utc>,
    use_color: Option<bool>,
) -> String {
    let lines = books
        .iter()
        .map(|dp| {
            let book = &dp.book;
            BookLine {
                index: format!("{:>3}.", dp.index),
                emoji: genre_emoji(book.genre),
                title: pad_to_width(&book.title, TITLE_WIDTH),
                author: pad_to_width(&book.author, AUTHOR_WIDTH),
                status: pad_to_width(book.status.label(), STATUS_WIDTH),
                status_style: status_style(book.status),
                progress: format!(
                    "{:>11}",
                    format!("{}/{}", book.current_page, book.total_pages)
                ),
                added: format_time_ago(book.added_date, now),
            }
        })
        .collect();

    let data = BookListData {
        books: lines,
        empty_message: "No books found.",
    };
    render(BOOK_LIST_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct SummaryItem {
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ReadingLine {
    index: String,
    emoji: &'static str,
    title: String,
    bar: String,
    percent: String,
    pages: String,
}

#[derive(Serialize)]
struct HomeData {
    greeting: String,
    summary: Vec<SummaryItem>,
    reading: Vec<ReadingLine>,
    empty_message: &'static str,
}

pub fn render_home(home: &HomeView) -> String {
    render_home_internal(home, None)
}

fn render_home_internal(home: &HomeView, use_color: Option<bool>) -> String {
    let s = &home.summary;
    let summary = vec![
        SummaryItem {
            label: "Books",
            value: s.total_books.to_string(),
        },
        SummaryItem {
            label: "Finished",
            value: s.finished_books.to_string(),
        },
        SummaryItem {
            label: "Pages read",
            value: s.total_pages.to_string(),
        },
        SummaryItem {
            label: "Streak",
            value: format!("{} day{}", s.streak, if s.streak == 1 { "" } else { "s" }),
        },
    ];

    let reading = home
        .reading
        .iter()
        .map(|rb| {
            let book = &rb.entry.book;
            ReadingLine {
                index: format!("{:>3}.", rb.entry.index),
                emoji: genre_emoji(book.genre),
                title: pad_to_width(&book.title, TITLE_WIDTH),
                bar: progress_bar(rb.percent, BAR_WIDTH),
                percent: format!("{:>3.0}%", rb.percent),
                pages: format!("{} / {} pages", book.current_page, book.total_pages),
            }
        })
        .collect();

    let data = HomeData {
        greeting: format!("{} 📚", home.greeting),
        summary,
        reading,
        empty_message: "Nothing in progress. Start one with `bookmarkr add`.",
    };
    render(HOME_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct GenreLine {
    emoji: &'static str,
    label: String,
    count: usize,
    count_style: &'static str,
}

#[derive(Serialize)]
struct GenresData {
    genres: Vec<GenreLine>,
}

pub fn render_genres(genres: &[GenreCount]) -> String {
    render_genres_internal(genres, None)
}

fn render_genres_internal(genres: &[GenreCount], use_color: Option<bool>) -> String {
    let data = GenresData {
        genres: genres
            .iter()
            .map(|g| GenreLine {
                emoji: g.emoji,
                label: pad_to_width(g.label, 14),
                count: g.count,
                count_style: if g.count > 0 { names::ACCENT } else { names::MUTED },
            })
            .collect(),
    };
    render(GENRES_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct QuoteLine {
    index: String,
    marker: &'static str,
    text: String,
    source: String,
}

#[derive(Serialize)]
struct QuotesData {
    quotes: Vec<QuoteLine>,
    empty_message: &'static str,
}

pub fn render_quotes(quotes: &[DisplayQuote]) -> String {
    render_quotes_internal(quotes, None)
}

fn render_quotes_internal(quotes: &[DisplayQuote], use_color: Option<bool>) -> String {
    let lines = quotes
        .iter()
        .map(|dq| {
            let source = match dq.quote.page {
                Some(page) => format!("— {}, p. {}", dq.book_title, page),
                None => format!("— {}", dq.book_title),
            };
            QuoteLine {
                index: format!("{:>3}.", dq.index),
                marker: if dq.quote.is_favorite { "★" } else { " " },
                text: dq.quote.text.clone(),
                source,
            }
        })
        .collect();

    let data = QuotesData {
        quotes: lines,
        empty_message: "No quotes saved.",
    };
    render(QUOTES_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct HeadlineItem {
    label: String,
    value: String,
    unit: &'static str,
}

#[derive(Serialize)]
struct BreakdownLine {
    label: String,
    bar: String,
    style: &'static str,
    count: usize,
    percent: String,
}

#[derive(Serialize)]
struct StatsData {
    headline: Vec<HeadlineItem>,
    breakdown: Vec<BreakdownLine>,
    empty_message: &'static str,
}

pub fn render_stats(stats: &ReadingStats) -> String {
    render_stats_internal(stats, None)
}

fn render_stats_internal(stats: &ReadingStats, use_color: Option<bool>) -> String {
    let headline = [
        ("This month", stats.month_pages.to_string(), "pages"),
        ("This year", stats.year_books.to_string(), "books finished"),
        ("30-day average", stats.average_pages.to_string(), "pages/day"),
    ]
    .into_iter()
    .map(|(label, value, unit)| HeadlineItem {
        label: pad_to_width(label, 15),
        value,
        unit,
    })
    .collect();

    let breakdown = stats
        .breakdown
        .iter()
        .map(|share| BreakdownLine {
            label: pad_to_width(share.status.label(), STATUS_WIDTH + 1),
            bar: progress_bar(share.percent, BAR_WIDTH),
            style: status_style(share.status),
            count: share.count,
            percent: format!("{:.1}%", share.percent),
        })
        .collect();

    let data = StatsData {
        headline,
        breakdown,
        empty_message: "No books yet.",
    };
    render(STATS_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct CalendarCell {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct CalendarData {
    title: String,
    weekdays: &'static str,
    weeks: Vec<Vec<CalendarCell>>,
    summary: String,
}

fn level_style(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::None => names::LEVEL_NONE,
        ActivityLevel::Light => names::LEVEL_LIGHT,
        ActivityLevel::Medium => names::LEVEL_MEDIUM,
        ActivityLevel::Heavy => names::LEVEL_HEAVY,
    }
}

pub fn render_calendar(month: &CalendarMonth) -> String {
    render_calendar_internal(month, None)
}

fn render_calendar_internal(month: &CalendarMonth, use_color: Option<bool>) -> String {
    let blanks = (0..month.leading_blanks).map(|_| CalendarCell {
        text: "  ".to_string(),
        style: names::LEVEL_NONE,
    });
    let days = month.days.iter().map(|d| CalendarCell {
        text: format!("{:>2}", d.day),
        style: if d.is_today {
            names::TODAY
        } else {
            level_style(d.level)
        },
    });

    let mut weeks: Vec<Vec<CalendarCell>> = Vec::new();
    for cell in blanks.chain(days) {
        match weeks.last_mut() {
            Some(week) if week.len() < 7 => week.push(cell),
            _ => weeks.push(vec![cell]),
        }
    }

    let title = NaiveDate::from_ymd_opt(month.year, month.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", month.year, month.month));

    let data = CalendarData {
        title,
        weekdays: WEEKDAYS,
        weeks,
        summary: format!(
            "{} pages over {} active day(s)",
            month.total_pages(),
            month.active_days()
        ),
    };
    render(CALENDAR_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct DayBookLine {
    title: String,
    pages: String,
}

#[derive(Serialize)]
struct DayData {
    title: String,
    total: String,
    books: Vec<DayBookLine>,
}

pub fn render_day(day: &DayDetails) -> String {
    render_day_internal(day, None)
}

fn render_day_internal(day: &DayDetails, use_color: Option<bool>) -> String {
    let data = DayData {
        title: day.date.format("%A, %B %-d, %Y").to_string(),
        total: format!("{} pages", day.total),
        books: day
            .books
            .iter()
            .map(|b| DayBookLine {
                title: pad_to_width(&b.title, TITLE_WIDTH),
                pages: format!("{} pages", b.pages),
            })
            .collect(),
    };
    render(DAY_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct CatalogLine {
    index: String,
    title: String,
    author: String,
    pages: String,
}

#[derive(Serialize)]
struct CatalogData {
    entries: Vec<CatalogLine>,
    hint: &'static str,
}

pub fn render_catalog(entries: &[CatalogEntry]) -> String {
    render_catalog_internal(entries, None)
}

fn render_catalog_internal(entries: &[CatalogEntry], use_color: Option<bool>) -> String {
    let data = CatalogData {
        entries: entries
            .iter()
            .enumerate()
            .map(|(i, e)| CatalogLine {
                index: format!("{:>3}.", i + 1),
                title: pad_to_width(&e.title, TITLE_WIDTH),
                author: pad_to_width(&e.author, AUTHOR_WIDTH + 8),
                pages: match e.page_count.filter(|p| *p > 0) {
                    Some(p) => format!("{} pages", p),
                    None => format!("~{} pages", DEFAULT_PAGE_COUNT),
                },
            })
            .collect(),
        hint: "Add one with: bookmarkr add --from-catalog <QUERY> --pick <N>",
    };
    render(CATALOG_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render(TEXT_LIST_TEMPLATE, &data, color_enabled(use_color))
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render(MESSAGES_TEMPLATE, &data, color_enabled(use_color)).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
