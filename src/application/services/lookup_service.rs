//! ISBN metadata lookup service.

use std::sync::Arc;

use crate::domain::entities::BookInfo;
use crate::domain::providers::BookInfoProvider;
use crate::error::AppError;

/// Service resolving book metadata from an ISBN.
pub struct IsbnLookupService {
    provider: Arc<dyn BookInfoProvider>,
}

impl IsbnLookupService {
    /// Creates a new lookup service.
    pub fn new(provider: Arc<dyn BookInfoProvider>) -> Self {
        Self { provider }
    }

    /// Resolves metadata for an ISBN.
    ///
    /// Hyphens are stripped before the provider is queried, so both
    /// `978-4-08-882071-2` and `9784088820712` resolve the same record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the provider does not know the
    /// ISBN, [`AppError::UpstreamUnavailable`] on transport failure.
    pub async fn lookup(&self, isbn: &str) -> Result<BookInfo, AppError> {
        let bare: String = isbn.chars().filter(|c| *c != '-').collect();

        self.provider
            .find_by_isbn(&bare)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No book found for ISBN {bare}")))
    }
}
