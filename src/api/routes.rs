//! API route configuration.

use crate::api::handlers::{lookup_handler, search_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /search`        - Aggregated book search by title/author
/// - `GET /books/{isbn}`  - Book metadata lookup by ISBN
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_handler))
        .route("/books/{isbn}", get(lookup_handler))
}
