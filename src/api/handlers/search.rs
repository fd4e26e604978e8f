//! Handler for the book search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::search::{BookSummary, SearchParams, SearchResponse};
use crate::domain::entities::BookQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Searches the upstream book catalog by title and/or author.
///
/// # Endpoint
///
/// `GET /api/search?title=...&author=...`
///
/// # Behavior
///
/// Aggregates every result page from the upstream provider (sequentially,
/// rate-limit paced), normalizes full-width text, verifies the collected
/// count against the provider's reported total, and returns the full set
/// sorted ascending by title.
///
/// # Response
///
/// ```json
/// {
///   "data": [
///     {
///       "title": "NARUTO 1",
///       "author": "岸本斉史",
///       "publisherName": "集英社",
///       "imageUrl": "https://thumbnail.example.com/1.jpg",
///       "isbn": "9784088728407"
///     }
///   ],
///   "size": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 500 with `{ "message": ... }` when neither parameter is supplied,
/// when the upstream API is unreachable, or when the aggregated count does
/// not match the provider's total (no partial results are ever returned).
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = BookQuery::new(params.title, params.author);

    // Boundary check mirroring the service precondition: reject before any
    // upstream call is attempted.
    if !query.has_term() {
        return Err(AppError::MissingQuery);
    }

    let result = state.search_service.search(&query).await?;

    Ok(Json(SearchResponse {
        size: result.reported_count,
        data: result.items.into_iter().map(BookSummary::from).collect(),
    }))
}
