//! DTOs for the ISBN lookup endpoint.

use serde::Serialize;

use crate::domain::entities::BookInfo;

/// Book metadata resolved from an ISBN.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInfoResponse {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub image_url: String,
}

impl From<BookInfo> for BookInfoResponse {
    fn from(info: BookInfo) -> Self {
        Self {
            title: info.title,
            author: info.author,
            publisher: info.publisher,
            isbn: info.isbn,
            image_url: info.image_url,
        }
    }
}
