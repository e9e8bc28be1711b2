//! # Book Catalog
//!
//! Looks books up in an external catalog so they can be added without typing their
//! details. The library only consumes [`CatalogEntry`] records; [`GoogleBooksCatalog`]
//! is the production source.

use crate::error::{BookmarkrError, Result};
use crate::model::Book;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Page count assumed when the catalog does not know one.
pub const DEFAULT_PAGE_COUNT: u32 = 200;
/// Shorter queries are not sent to the catalog.
pub const MIN_QUERY_LEN: usize = 2;

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A candidate book returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
    pub page_count: Option<u32>,
    pub thumbnail: Option<String>,
}

impl CatalogEntry {
    /// A new reading-status book built from this entry.
    pub fn into_book(self, added: DateTime<Utc>) -> Book {
        let pages = self
            .page_count
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE_COUNT);
        let mut book = Book::new(self.title, self.author, pages, added);
        book.cover_image = self.thumbnail.filter(|t| !t.is_empty());
        book
    }
}

pub trait BookCatalog {
    fn search(&self, query: &str) -> Result<Vec<CatalogEntry>>;
}

pub struct GoogleBooksCatalog {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    max_results: u32,
}

impl GoogleBooksCatalog {
    pub fn new(api_key: Option<String>, max_results: u32) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            max_results,
        })
    }
}

impl BookCatalog for GoogleBooksCatalog {
    fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let max_results = self.max_results.to_string();
        let mut params = vec![("q", query), ("maxResults", max_results.as_str())];
        if let Some(key) = &self.api_key {
            params.push(("key", key.as_str()));
        }

        debug!(query, "searching Google Books");
        let response = self.client.get(GOOGLE_BOOKS_URL).query(&params).send()?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "catalog search failed");
            return Err(BookmarkrError::Catalog(format!(
                "search failed with status {}",
                response.status()
            )));
        }

        let body = response.text()?;
        parse_volumes(&body)
    }
}

#[derive(Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<VolumeItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeItem {
    #[serde(default)]
    volume_info: VolumeInfo,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    page_count: Option<u32>,
    image_links: Option<ImageLinks>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    thumbnail: Option<String>,
    small_thumbnail: Option<String>,
}

/// Parses a Google Books `volumes` response body.
pub fn parse_volumes(body: &str) -> Result<Vec<CatalogEntry>> {
    let response: VolumesResponse = serde_json::from_str(body)
        .map_err(|e| BookmarkrError::Catalog(format!("unexpected response: {}", e)))?;

    Ok(response
        .items
        .into_iter()
        .map(|item| {
            let info = item.volume_info;
            let author = if info.authors.is_empty() {
                UNKNOWN_AUTHOR.to_string()
            } else {
                info.authors.join(", ")
            };
            let thumbnail = info
                .image_links
                .and_then(|links| links.thumbnail.or(links.small_thumbnail));

            CatalogEntry {
                title: info
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
                author,
                page_count: info.page_count,
                thumbnail,
            }
        })
        .collect())
}

/// Fixed results, for tests and offline use.
#[derive(Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }
}

impl BookCatalog for StaticCatalog {
    fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }
        let q = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&q) || e.author.to_lowercase().contains(&q))
            .cloned()
            .collect())
    }
}
