//! Provider trait for ISBN metadata lookup.

use crate::domain::entities::BookInfo;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface to an ISBN metadata provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::openbd::OpenBdClient`] - openBD lookup API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookInfoProvider: Send + Sync {
    /// Resolves metadata for a bare (hyphen-free) ISBN.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(info))` when the provider knows the ISBN
    /// - `Ok(None)` when the ISBN is unknown to the provider
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] when the provider cannot be
    /// reached at the transport level.
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookInfo>, AppError>;
}
