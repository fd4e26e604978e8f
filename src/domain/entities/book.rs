//! Book search entities: query input, provider records, normalized results.

use serde::Deserialize;

use crate::utils::char_width::{normalize_author, normalize_title};

/// Sentinel for "the provider never reported a total" (no parseable page 1).
pub const UNREPORTED_COUNT: i64 = -1;

/// A free-text book search request.
///
/// At least one of `title` / `author` must carry a non-empty value; empty
/// strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookQuery {
    /// Creates a query, demoting empty strings to `None`.
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            author: author.filter(|a| !a.is_empty()),
        }
    }

    /// Returns true if the query carries at least one search term.
    pub fn has_term(&self) -> bool {
        self.title.is_some() || self.author.is_some()
    }
}

/// One item exactly as returned by the upstream search API.
///
/// Text fields may contain full-width characters and full-width spaces; the
/// provider omits fields it has no data for, which deserialize to empty
/// strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBookRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publisher_name: String,
    #[serde(default)]
    pub large_image_url: String,
    #[serde(default)]
    pub isbn: String,
}

/// One page of results as seen by the aggregation loop.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<RawBookRecord>,
    /// Total result count claimed by the provider for the whole query.
    pub count: i64,
    /// Total number of pages the provider will serve for the query.
    pub page_count: u32,
}

/// A book record with normalized text fields.
///
/// Invariants: `title` and `author` are half-width-folded; `author` contains
/// no spaces. `publisher_name`, `image_url`, and `isbn` pass through from the
/// provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher_name: String,
    pub image_url: String,
    pub isbn: String,
}

impl Book {
    /// Builds a normalized book from a raw provider record.
    pub fn from_raw(raw: RawBookRecord) -> Self {
        Self {
            title: normalize_title(&raw.title),
            author: normalize_author(&raw.author),
            publisher_name: raw.publisher_name,
            image_url: raw.large_image_url,
            isbn: raw.isbn,
        }
    }
}

/// The fully aggregated, verified, and sorted result of a search.
#[derive(Debug, Clone)]
pub struct BookResultSet {
    /// Normalized books sorted ascending by title (code-point order).
    pub items: Vec<Book>,
    /// The provider's reported total; equals `items.len()` by construction.
    pub reported_count: i64,
}
