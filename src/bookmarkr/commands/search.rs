use crate::catalog::{BookCatalog, CatalogEntry, MIN_QUERY_LEN};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookmarkrError, Result};

pub fn run<C: BookCatalog>(catalog: &C, query: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if query.trim().chars().count() < MIN_QUERY_LEN {
        result.add_message(CmdMessage::info(format!(
            "Type at least {} characters to search",
            MIN_QUERY_LEN
        )));
        return Ok(result);
    }

    let entries = catalog.search(query)?;
    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!("No books found for \"{}\"", query)));
    }
    Ok(result.with_catalog_results(entries))
}

/// Runs the search and takes the 1-based `pick` from its results.
pub fn pick<C: BookCatalog>(catalog: &C, query: &str, pick: usize) -> Result<CatalogEntry> {
    let entries = catalog.search(query)?;
    let count = entries.len();
    pick.checked_sub(1)
        .and_then(|i| entries.into_iter().nth(i))
        .ok_or_else(|| {
            BookmarkrError::InvalidInput(format!(
                "result {} is out of range ({} found for \"{}\")",
                pick, count, query
            ))
        })
}
