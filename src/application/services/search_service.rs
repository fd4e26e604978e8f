//! Book search aggregation service.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::domain::entities::{Book, BookQuery, BookResultSet, UNREPORTED_COUNT};
use crate::domain::providers::BookSearchProvider;
use crate::error::AppError;

/// Pause before every page request after the first.
///
/// The upstream API blocks clients that fire requests back to back, so the
/// pacing is part of the contract with the provider, not a tuning knob.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(300);

/// Service that aggregates paginated search results into one verified set.
///
/// Drives the injected [`BookSearchProvider`] one page at a time, normalizes
/// every record, checks the collected total against the count the provider
/// reported, and sorts the outcome by title.
pub struct BookSearchService {
    provider: Arc<dyn BookSearchProvider>,
    page_delay: Duration,
}

impl BookSearchService {
    /// Creates a new search service.
    pub fn new(provider: Arc<dyn BookSearchProvider>, page_delay: Duration) -> Self {
        Self {
            provider,
            page_delay,
        }
    }

    /// Runs a full search: fetch page 1, walk the remaining pages in order,
    /// verify completeness, sort.
    ///
    /// Pages after the first are requested strictly sequentially, each
    /// preceded by the configured page delay. There is no overall timeout and
    /// no retry; once pagination starts it runs to completion or failure.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingQuery`] if the query has no search term (the
    ///   provider is never called)
    /// - [`AppError::UpstreamUnavailable`] if any page fetch fails at the
    ///   transport level
    /// - [`AppError::Integrity`] if the collected item count differs from the
    ///   provider's reported total; partial data is never returned
    pub async fn search(&self, query: &BookQuery) -> Result<BookResultSet, AppError> {
        if !query.has_term() {
            return Err(AppError::MissingQuery);
        }

        let mut books: Vec<Book> = Vec::new();
        let mut reported_count = UNREPORTED_COUNT;
        let mut page_count: u32 = 0;

        if let Some(first) = self.provider.fetch_page(query, 1).await? {
            reported_count = first.count;
            page_count = first.page_count;
            books.extend(first.items.into_iter().map(Book::from_raw));
        }

        // Page 1 is already in hand; the provider serves pages 2..=page_count.
        for page in 2..=page_count {
            sleep(self.page_delay).await;
            if let Some(next) = self.provider.fetch_page(query, page).await? {
                books.extend(next.items.into_iter().map(Book::from_raw));
            }
        }

        if reported_count != books.len() as i64 {
            return Err(AppError::Integrity {
                reported: reported_count,
                collected: books.len(),
            });
        }

        tracing::debug!(
            pages = page_count,
            total = reported_count,
            "search aggregation complete"
        );

        books.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(BookResultSet {
            items: books,
            reported_count,
        })
    }
}
