//! DTOs for the book search endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Book;

/// Query parameters accepted by the search endpoint.
///
/// At least one of the two must be present and non-empty.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Successful search response.
///
/// `data` is sorted ascending by title; `size` always equals `data.len()`
/// (the aggregation fails outright when the provider's reported total
/// disagrees with the collected items).
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub data: Vec<BookSummary>,
    pub size: i64,
}

/// One normalized book record as serialized to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub publisher_name: String,
    pub image_url: String,
    pub isbn: String,
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            publisher_name: book.publisher_name,
            image_url: book.image_url,
            isbn: book.isbn,
        }
    }
}
