//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{BookSearchService, IsbnLookupService};

/// Application state shared by all handlers.
///
/// Services are behind `Arc` so the state clones cheaply per request; tests
/// build the same state around stub providers.
#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<BookSearchService>,
    pub lookup_service: Arc<IsbnLookupService>,
}
