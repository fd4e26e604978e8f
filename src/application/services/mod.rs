//! Business logic services for the application layer.

pub mod lookup_service;
pub mod search_service;

pub use lookup_service::IsbnLookupService;
pub use search_service::{BookSearchService, DEFAULT_PAGE_DELAY};
