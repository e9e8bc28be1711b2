//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone files, which are
//! easier to edit and diff than format strings. They are embedded here as constants.
//!
//! Conventions:
//!
//! 1. Layout math (widths, truncation, padding) happens in Rust; templates receive ready
//!    strings and only pick styles.
//! 2. Styles are chosen in Rust as style names and passed along, so templates do
//!    `{{ value | style(entry.style) }}` instead of branching on flags.
//! 3. Every template ends its lines explicitly, so blank lines are easy to trace.

pub const HOME_TEMPLATE: &str = include_str!("templates/home.tmp");
pub const BOOK_LIST_TEMPLATE: &str = include_str!("templates/book_list.tmp");
pub const GENRES_TEMPLATE: &str = include_str!("templates/genres.tmp");
pub const QUOTES_TEMPLATE: &str = include_str!("templates/quotes.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const CALENDAR_TEMPLATE: &str = include_str!("templates/calendar.tmp");
pub const DAY_TEMPLATE: &str = include_str!("templates/day.tmp");
pub const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
