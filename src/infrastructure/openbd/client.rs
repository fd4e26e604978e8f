//! openBD implementation of the ISBN metadata provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::BookInfo;
use crate::domain::providers::BookInfoProvider;
use crate::error::AppError;
use crate::utils::cover::cover_image_url;

/// HTTP client for the openBD book lookup API.
///
/// openBD answers `GET /v1/get?isbn=...` with a JSON array holding one entry
/// per requested ISBN; unknown ISBNs come back as `null` markers.
pub struct OpenBdClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl OpenBdClient {
    /// Creates a new client against the given API base URL.
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        let mut endpoint = base_url;
        endpoint.set_path("/v1/get");
        Self { http, endpoint }
    }
}

#[derive(Debug, Deserialize)]
struct OpenBdEntry {
    summary: OpenBdSummary,
}

#[derive(Debug, Deserialize)]
struct OpenBdSummary {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    publisher: String,
}

#[async_trait]
impl BookInfoProvider for OpenBdClient {
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookInfo>, AppError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("isbn", isbn)])
            .send()
            .await
            .map_err(|e| {
                warn!("openBD request failed: {}", e);
                AppError::upstream(e.to_string())
            })?;

        let entries: Vec<Option<OpenBdEntry>> = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("unparseable openBD response: {e}")))?;

        // A null first entry is openBD's "no such ISBN" marker.
        let Some(Some(entry)) = entries.into_iter().next() else {
            debug!(isbn, "openBD has no record");
            return Ok(None);
        };

        Ok(Some(BookInfo {
            title: entry.summary.title,
            author: entry.summary.author,
            publisher: entry.summary.publisher,
            isbn: isbn.to_string(),
            image_url: cover_image_url(isbn),
        }))
    }
}
