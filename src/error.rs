//! Application error taxonomy and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned on every failure path.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Application-level errors surfaced to API clients.
///
/// Every variant maps to an explicit HTTP response; no failure is swallowed.
/// None of these are retried: a search is a single pass through pagination
/// and any retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller supplied neither a title nor an author.
    #[error("Please set title or author to query.")]
    MissingQuery,

    /// The upstream book-data API could not be reached.
    #[error("Upstream book API unavailable: {reason}")]
    UpstreamUnavailable { reason: String },

    /// Pagination completed but the collected item count does not match the
    /// total the provider reported. Partial data is never returned.
    #[error("Result count mismatch: provider reported {reported}, collected {collected}")]
    Integrity { reported: i64, collected: usize },

    /// A looked-up resource does not exist upstream.
    #[error("{message}")]
    NotFound { message: String },
}

impl AppError {
    pub fn upstream(reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            reason: reason.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The search endpoint contract collapses client and upstream failures
        // alike into 500 + { message }; only lookup misses are 404.
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MissingQuery
            | AppError::UpstreamUnavailable { .. }
            | AppError::Integrity { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
