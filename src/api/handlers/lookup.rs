//! Handler for the ISBN lookup endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::lookup::BookInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves book metadata and a cover image URL for an ISBN.
///
/// # Endpoint
///
/// `GET /api/books/{isbn}`
///
/// Hyphenated and bare ISBNs are both accepted.
///
/// # Response
///
/// ```json
/// {
///   "title": "NARUTO 巻ノ1",
///   "author": "岸本斉史／著",
///   "publisher": "集英社",
///   "isbn": "9784088728407",
///   "imageUrl": "https://cover.openbd.jp/9784088728407.jpg"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 when the provider has no record for the ISBN, 500 when the
/// provider is unreachable.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<BookInfoResponse>, AppError> {
    let info = state.lookup_service.lookup(&isbn).await?;
    Ok(Json(BookInfoResponse::from(info)))
}
