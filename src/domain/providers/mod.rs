//! Provider trait definitions for the domain layer.
//!
//! This module defines the interfaces (traits) that abstract the external
//! book-data APIs the service depends on. The traits are implemented by
//! concrete HTTP clients in the infrastructure layer; services receive them
//! as injected `Arc<dyn …>` dependencies so tests can substitute fakes.
//!
//! # Available Providers
//!
//! - [`BookSearchProvider`] - Paginated free-text book search
//! - [`BookInfoProvider`] - ISBN metadata lookup
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall`; integration tests
//! under `tests/` use hand-rolled stubs instead (see `tests/common`).

pub mod book_info_provider;
pub mod book_search_provider;

pub use book_info_provider::BookInfoProvider;
pub use book_search_provider::BookSearchProvider;

#[cfg(test)]
pub use book_info_provider::MockBookInfoProvider;
#[cfg(test)]
pub use book_search_provider::MockBookSearchProvider;
