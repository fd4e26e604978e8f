//! Provider trait for the upstream paginated book-search API.

use crate::domain::entities::{BookQuery, SearchPage};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface to a paginated book-search provider.
///
/// The aggregation service drives this one page at a time; implementations
/// are responsible for request construction (credential, category filter,
/// query-term encoding) and envelope parsing, nothing more. Pacing between
/// pages is owned by the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::rakuten::RakutenBooksClient`] - Rakuten Books API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookSearchProvider: Send + Sync {
    /// Fetches one page of search results. Pages are 1-based.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(page))` when the provider returned a parseable envelope
    /// - `Ok(None)` when the response body could not be interpreted; the
    ///   caller decides what an absent page means for the aggregate
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] when the provider cannot be
    /// reached at the transport level.
    async fn fetch_page(&self, query: &BookQuery, page: u32)
    -> Result<Option<SearchPage>, AppError>;
}
