//! Cover image URL derivation.

/// Base URL of the openBD cover image host.
const COVER_BASE_URL: &str = "https://cover.openbd.jp";

/// Returns the conventional cover image URL for an ISBN.
///
/// openBD serves cover art at a fixed path derived from the bare ISBN; no
/// lookup is involved. The caller is expected to pass an ISBN with hyphens
/// already stripped.
pub fn cover_image_url(isbn: &str) -> String {
    format!("{}/{}.jpg", COVER_BASE_URL, isbn)
}
