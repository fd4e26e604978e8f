//! Rakuten Books implementation of the search provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{BookQuery, RawBookRecord, SearchPage};
use crate::domain::providers::BookSearchProvider;
use crate::error::AppError;

/// HTTP client for the Rakuten Books search API.
///
/// Builds one GET request per result page. Query terms pass through the
/// standard form encoder, which transcodes them to UTF-8 bytes and then
/// percent-escapes those bytes, the representation the API expects for
/// non-ASCII text.
pub struct RakutenBooksClient {
    http: reqwest::Client,
    endpoint: Url,
    application_id: String,
    genre_id: String,
}

impl RakutenBooksClient {
    /// Creates a new client against the given search endpoint.
    pub fn new(
        http: reqwest::Client,
        endpoint: Url,
        application_id: String,
        genre_id: String,
    ) -> Self {
        Self {
            http,
            endpoint,
            application_id,
            genre_id,
        }
    }
}

/// Response envelope of the Rakuten Books search API.
///
/// All three fields are required: an envelope without them (e.g. the API's
/// own error body) counts as unparseable, which the aggregation layer turns
/// into an integrity failure rather than an empty success.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Items")]
    items: Vec<EnvelopeItem>,
    count: i64,
    #[serde(rename = "pageCount")]
    page_count: u32,
}

/// Rakuten wraps every record in a single-field `Item` object.
#[derive(Debug, Deserialize)]
struct EnvelopeItem {
    #[serde(rename = "Item")]
    item: RawBookRecord,
}

impl From<SearchEnvelope> for SearchPage {
    fn from(envelope: SearchEnvelope) -> Self {
        SearchPage {
            items: envelope.items.into_iter().map(|i| i.item).collect(),
            count: envelope.count,
            page_count: envelope.page_count,
        }
    }
}

#[async_trait]
impl BookSearchProvider for RakutenBooksClient {
    async fn fetch_page(
        &self,
        query: &BookQuery,
        page: u32,
    ) -> Result<Option<SearchPage>, AppError> {
        let mut request = self.http.get(self.endpoint.clone()).query(&[
            ("applicationId", self.application_id.as_str()),
            ("booksGenreId", self.genre_id.as_str()),
        ]);

        // Title and author are appended independently; either may be absent.
        if let Some(title) = &query.title {
            request = request.query(&[("title", title.as_str())]);
        }
        if let Some(author) = &query.author {
            request = request.query(&[("author", author.as_str())]);
        }
        if page > 1 {
            request = request.query(&[("page", page.to_string().as_str())]);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Rakuten Books request failed: {}", e);
            AppError::upstream(e.to_string())
        })?;

        match response.json::<SearchEnvelope>().await {
            Ok(envelope) => {
                debug!(
                    page,
                    count = envelope.count,
                    page_count = envelope.page_count,
                    "fetched search page"
                );
                Ok(Some(envelope.into()))
            }
            Err(e) => {
                warn!(page, "unparseable search response: {}", e);
                Ok(None)
            }
        }
    }
}
