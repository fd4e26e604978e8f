//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! core concepts of the book search service. Entities are plain data
//! structures without business logic beyond construction-time normalization.
//!
//! # Entity Types
//!
//! - [`BookQuery`] - A free-text title/author search request
//! - [`RawBookRecord`] / [`SearchPage`] - Provider data before normalization
//! - [`Book`] / [`BookResultSet`] - Normalized, verified search results
//! - [`BookInfo`] - Metadata resolved from an ISBN lookup

pub mod book;
pub mod book_info;

pub use book::{Book, BookQuery, BookResultSet, RawBookRecord, SearchPage, UNREPORTED_COUNT};
pub use book_info::BookInfo;
