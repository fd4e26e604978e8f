//! Book metadata resolved from an ISBN lookup.

/// Metadata for a single book resolved via the ISBN lookup provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInfo {
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// The bare ISBN the record was resolved for (hyphens stripped).
    pub isbn: String,
    /// Conventional cover image URL derived from the ISBN.
    pub image_url: String,
}
