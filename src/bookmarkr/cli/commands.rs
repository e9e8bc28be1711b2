//! # CLI Layer
//!
//! This module is **one possible UI client** for bookmarkr, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Turns raw strings (statuses, genres, dates, cover paths) into typed values
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load configuration, build `AppContext`
//! 3. **API Dispatch**: Call the appropriate `BookmarkrApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//!
//! Business rules live in the command layer. Handlers here only translate input and
//! print whatever the API hands back.

use super::render::{
    print_messages, render_book_list, render_calendar, render_catalog, render_day, render_genres,
    render_home, render_quotes, render_stats, render_text_list,
};
use super::setup::{
    command_name, print_grouped_help, print_help_for_command, BookCommands, Cli, Commands,
    MiscCommands, QuoteCommands, ViewCommands,
};
use bookmarkr::api::BookmarkrApi;
use bookmarkr::catalog::GoogleBooksCatalog;
use bookmarkr::commands::add::BookDraft;
use bookmarkr::commands::config::ConfigAction;
use bookmarkr::commands::edit::BookPatch;
use bookmarkr::commands::list::{LibraryFilter, StatusFilter};
use bookmarkr::commands::quotes::QuoteFilter;
use bookmarkr::commands::BookmarkrPaths;
use bookmarkr::config::BookmarkrConfig;
use bookmarkr::cover::resolve_cover;
use bookmarkr::error::{BookmarkrError, Result};
use bookmarkr::index::parse_selector;
use bookmarkr::model::{BookStatus, Genre};
use bookmarkr::store::fs::FileStore;
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Overrides the data directory (library and config).
const HOME_ENV: &str = "BOOKMARKR_HOME";
/// Log filter, e.g. `BOOKMARKR_LOG=bookmarkr=trace`.
const LOG_ENV: &str = "BOOKMARKR_LOG";

struct AppContext {
    api: BookmarkrApi<FileStore>,
    config: BookmarkrConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if cli.help {
        match &cli.command {
            None => print_grouped_help(),
            Some(cmd) => print_help_for_command(command_name(cmd)),
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Books(cmd)) => match cmd {
            BookCommands::Add {
                title,
                author,
                pages,
                current,
                status,
                genre,
                cover,
                from_catalog,
                pick,
            } => match from_catalog {
                Some(query) => handle_add_from_catalog(&mut ctx, &query, pick),
                None => handle_add(
                    &mut ctx,
                    title.join(" "),
                    author.unwrap_or_default(),
                    pages.unwrap_or_default(),
                    current,
                    status,
                    genre,
                    cover,
                ),
            },
            BookCommands::Search { query } => handle_search(&mut ctx, query.join(" ")),
            BookCommands::List { status, genre } => handle_list(&mut ctx, status, genre),
            BookCommands::Progress { book, page } => handle_progress(&mut ctx, book, page),
            BookCommands::Edit {
                book,
                title,
                author,
                pages,
                page,
                status,
                genre,
                cover,
            } => {
                let patch = BookPatch {
                    title,
                    author,
                    total_pages: pages,
                    current_page: page,
                    status: status.as_deref().map(parse_status).transpose()?,
                    genre: genre.as_deref().map(parse_genre_or_none).transpose()?,
                    cover_image: cover.as_deref().map(resolve_cover).transpose()?,
                };
                handle_edit(&mut ctx, book, patch)
            }
            BookCommands::Delete { book } => handle_delete(&mut ctx, book),
        },
        Some(Commands::Quote { action }) => match action {
            QuoteCommands::Add {
                book,
                text,
                page,
                favorite,
            } => handle_quote_add(&mut ctx, book, text, page, favorite),
            QuoteCommands::List { favorites } => handle_quote_list(&mut ctx, favorites),
            QuoteCommands::Fav { index } => handle_quote_fav(&mut ctx, index),
            QuoteCommands::Delete { index } => handle_quote_delete(&mut ctx, index),
        },
        Some(Commands::Views(cmd)) => match cmd {
            ViewCommands::Home => handle_home(&mut ctx),
            ViewCommands::Genres => handle_genres(&mut ctx),
            ViewCommands::Stats => handle_stats(&mut ctx),
            ViewCommands::Calendar { month } => handle_calendar(&mut ctx, month),
            ViewCommands::Day { date } => handle_day(&mut ctx, date),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Doctor => handle_doctor(&mut ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Help { .. } => Ok(()),
        },
        None => handle_home(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bookmarkr=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bookmarkr", "bookmarkr")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookmarkrError::Store("could not determine a data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!(dir = %data_dir.display(), "using data directory");

    let config = BookmarkrConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = BookmarkrApi::new(store, BookmarkrPaths { data_dir });

    Ok(AppContext { api, config })
}

fn catalog(ctx: &AppContext) -> Result<GoogleBooksCatalog> {
    GoogleBooksCatalog::new(ctx.config.api_key.clone(), ctx.config.max_results)
}

fn parse_status(raw: &str) -> Result<BookStatus> {
    raw.parse()
}

fn parse_genre(raw: &str) -> Result<Genre> {
    raw.parse()
}

/// `none` clears a genre on edit.
fn parse_genre_or_none(raw: &str) -> Result<Option<Genre>> {
    if raw.trim().eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        parse_genre(raw).map(Some)
    }
}

fn parse_month(raw: &str) -> Result<(i32, u32)> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| BookmarkrError::InvalidInput(format!("expected YYYY-MM, got '{}'", raw)))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BookmarkrError::InvalidInput(format!("expected YYYY-MM-DD, got '{}'", raw)))
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    pages: u32,
    current: u32,
    status: String,
    genre: Option<String>,
    cover: Option<String>,
) -> Result<()> {
    let draft = BookDraft {
        current_page: current,
        status: parse_status(&status)?,
        genre: genre.as_deref().map(parse_genre).transpose()?,
        cover_image: cover.as_deref().map(resolve_cover).transpose()?,
        ..BookDraft::new(title, author, pages)
    };
    let result = ctx.api.add_book(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_from_catalog(ctx: &mut AppContext, query: &str, pick: usize) -> Result<()> {
    let catalog = catalog(ctx)?;
    let result = ctx.api.add_from_catalog(&catalog, query, pick)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String) -> Result<()> {
    let catalog = catalog(ctx)?;
    let result = ctx.api.search_catalog(&catalog, &query)?;
    print!("{}", render_catalog(&result.catalog_results));
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, status: String, genre: Option<String>) -> Result<()> {
    let filter = LibraryFilter {
        status: status.parse::<StatusFilter>()?,
        genre: genre.as_deref().map(parse_genre).transpose()?,
    };
    let result = ctx.api.list_books(filter)?;
    print!("{}", render_book_list(&result.listed_books));
    print_messages(&result.messages);
    Ok(())
}

fn handle_progress(ctx: &mut AppContext, book: Vec<String>, page: u32) -> Result<()> {
    let result = ctx.api.update_progress(&book, page)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, book: Vec<String>, patch: BookPatch) -> Result<()> {
    let result = ctx.api.edit_book(&book, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, book: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_book(&book)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_quote_add(
    ctx: &mut AppContext,
    book: Vec<String>,
    text: String,
    page: Option<u32>,
    favorite: bool,
) -> Result<()> {
    let selector = parse_selector(&book)?;
    let result = ctx.api.add_quote(selector, text, page, favorite)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_quote_list(ctx: &mut AppContext, favorites: bool) -> Result<()> {
    let filter = if favorites {
        QuoteFilter::Favorites
    } else {
        QuoteFilter::All
    };
    let result = ctx.api.list_quotes(filter)?;
    print!("{}", render_quotes(&result.listed_quotes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_quote_fav(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.toggle_favorite(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_quote_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.delete_quote(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_home(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.home()?;
    if let Some(home) = &result.home {
        print!("{}", render_home(home));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_genres(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.genres()?;
    print!("{}", render_genres(&result.genres));
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_calendar(ctx: &mut AppContext, month: Option<String>) -> Result<()> {
    let (year, month) = match month.as_deref().map(parse_month).transpose()? {
        Some((y, m)) => (Some(y), Some(m)),
        None => (None, None),
    };
    let result = ctx.api.calendar(year, month)?;
    if let Some(calendar) = &result.calendar {
        print!("{}", render_calendar(calendar));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_day(ctx: &mut AppContext, date: Option<String>) -> Result<()> {
    let date = date.as_deref().map(parse_date).transpose()?;
    let result = ctx.api.day(date)?;
    if let Some(day) = &result.day {
        print!("{}", render_day(day));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;

    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_argument_parses() {
        assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("feb").is_err());
    }

    #[test]
    fn date_argument_parses() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(BookmarkrError::InvalidInput(_))
        ));
    }

    #[test]
    fn genre_none_clears() {
        assert_eq!(parse_genre_or_none("none").unwrap(), None);
        assert_eq!(
            parse_genre_or_none("fiction").unwrap(),
            Some(Genre::Fiction)
        );
        assert!(parse_genre_or_none("cookbooks").is_err());
    }
}
