#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use manga_shelf::application::services::{BookSearchService, IsbnLookupService};
use manga_shelf::domain::entities::{BookInfo, BookQuery, RawBookRecord, SearchPage};
use manga_shelf::domain::providers::{BookInfoProvider, BookSearchProvider};
use manga_shelf::error::AppError;
use manga_shelf::state::AppState;

/// Search provider serving pre-baked pages; records how often it was called.
///
/// `pages[n]` is served for page `n + 1`; `None` entries simulate an
/// unparseable provider response, pages past the end of the script too.
pub struct StubSearchProvider {
    pages: Vec<Option<SearchPage>>,
    calls: Arc<AtomicU32>,
}

impl StubSearchProvider {
    pub fn new(pages: Vec<Option<SearchPage>>) -> (Self, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        (
            Self {
                pages,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl BookSearchProvider for StubSearchProvider {
    async fn fetch_page(
        &self,
        _query: &BookQuery,
        page: u32,
    ) -> Result<Option<SearchPage>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages.get((page - 1) as usize).cloned().flatten())
    }
}

/// Search provider that fails at the transport level on every call.
pub struct FailingSearchProvider;

#[async_trait]
impl BookSearchProvider for FailingSearchProvider {
    async fn fetch_page(
        &self,
        _query: &BookQuery,
        _page: u32,
    ) -> Result<Option<SearchPage>, AppError> {
        Err(AppError::upstream("connection refused"))
    }
}

/// ISBN provider answering from a fixed record.
pub struct StubInfoProvider {
    record: Option<BookInfo>,
}

impl StubInfoProvider {
    pub fn new(record: Option<BookInfo>) -> Self {
        Self { record }
    }
}

#[async_trait]
impl BookInfoProvider for StubInfoProvider {
    async fn find_by_isbn(&self, _isbn: &str) -> Result<Option<BookInfo>, AppError> {
        Ok(self.record.clone())
    }
}

pub fn raw_record(title: &str, author: &str, isbn: &str) -> RawBookRecord {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "author": author,
        "publisherName": "集英社",
        "largeImageUrl": format!("https://thumbnail.example.com/{isbn}.jpg"),
        "isbn": isbn,
    }))
    .unwrap()
}

pub fn search_page(items: Vec<RawBookRecord>, count: i64, page_count: u32) -> SearchPage {
    SearchPage {
        items,
        count,
        page_count,
    }
}

pub fn test_book_info(isbn: &str) -> BookInfo {
    BookInfo {
        title: "NARUTO 巻ノ1".to_string(),
        author: "岸本斉史／著".to_string(),
        publisher: "集英社".to_string(),
        isbn: isbn.to_string(),
        image_url: format!("https://cover.openbd.jp/{isbn}.jpg"),
    }
}

/// Builds application state around the given providers.
///
/// The page delay is zero so multi-page tests don't wait out the production
/// pacing; the delay itself is covered by unit tests with a paused clock.
pub fn create_test_state(
    search_provider: impl BookSearchProvider + 'static,
    info_provider: impl BookInfoProvider + 'static,
) -> AppState {
    let search_service = Arc::new(BookSearchService::new(
        Arc::new(search_provider),
        Duration::ZERO,
    ));
    let lookup_service = Arc::new(IsbnLookupService::new(Arc::new(info_provider)));

    AppState {
        search_service,
        lookup_service,
    }
}

/// State with an empty, never-called search script and no ISBN record.
pub fn empty_test_state() -> AppState {
    let (provider, _calls) = StubSearchProvider::new(vec![]);
    create_test_state(provider, StubInfoProvider::new(None))
}
