//! # Manga Shelf
//!
//! Book search and ISBN metadata service backing a personal manga collection
//! tracker, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and provider traits
//! - **Application Layer** ([`application`]) - Search aggregation and lookup services
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP clients for the external book APIs
//! - **API Layer** ([`api`]) - REST API handlers and DTOs
//!
//! ## Features
//!
//! - Title/author search against the Rakuten Books API with sequential,
//!   rate-limit-paced pagination
//! - Full-width to half-width text normalization for consistent titles and
//!   authors
//! - Completeness check of aggregated results against the provider's
//!   reported total (no silent partial results)
//! - ISBN metadata lookup via openBD with conventional cover image URLs
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the required credential
//! export RAKUTEN_APP_ID="your-application-id"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BookSearchService, IsbnLookupService};
    pub use crate::domain::entities::{Book, BookInfo, BookQuery, BookResultSet};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
