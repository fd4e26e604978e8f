//! Full-width to half-width character normalization.
//!
//! Japanese book metadata frequently mixes full-width and half-width forms of
//! the same Latin characters (e.g. `Ｖｏｌ．１` vs `Vol.1`), which breaks
//! grouping and sorting. These helpers fold the full-width forms down to
//! their half-width equivalents so titles and authors compare consistently.

/// Converts full-width Latin letters, digits, and spaces to half-width.
///
/// # Conversion Rules
///
/// 1. **Letters**: `Ａ`–`Ｚ` (U+FF21..U+FF3A) and `ａ`–`ｚ` (U+FF41..U+FF5A)
///    map to `A`–`Z` / `a`–`z`
/// 2. **Digits**: `０`–`９` (U+FF10..U+FF19) map to `0`–`9`
/// 3. **Space**: ideographic space U+3000 maps to an ASCII space
/// 4. Everything else (kana, kanji, punctuation) is preserved as-is
///
/// The mapping is idempotent: half-width input passes through unchanged.
pub fn to_half_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            // Full-width A-Z / a-z / 0-9 sit at a fixed offset from ASCII.
            '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' | '\u{FF10}'..='\u{FF19}' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            '\u{3000}' => ' ',
            _ => c,
        })
        .collect()
}

/// Normalizes a book title for display and ordering.
///
/// Applies [`to_half_width`]; spaces are kept (single half-width class) so
/// multi-word titles stay readable.
pub fn normalize_title(title: &str) -> String {
    to_half_width(title)
}

/// Normalizes an author name for display and grouping.
///
/// Applies [`to_half_width`], then strips every remaining space. Providers are
/// inconsistent about separating family and given names (`尾田　栄一郎` vs
/// `尾田栄一郎`), so the compact space-free form is the canonical one.
pub fn normalize_author(author: &str) -> String {
    to_half_width(author).chars().filter(|c| *c != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_letters_converted() {
        assert_eq!(to_half_width("ＡＢＣｘｙｚ"), "ABCxyz");
    }

    #[test]
    fn test_full_width_digits_converted() {
        assert_eq!(to_half_width("０１２３４５６７８９"), "0123456789");
    }

    #[test]
    fn test_full_width_space_converted() {
        assert_eq!(to_half_width("ＯＮＥ\u{3000}ＰＩＥＣＥ"), "ONE PIECE");
    }

    #[test]
    fn test_kana_and_kanji_preserved() {
        assert_eq!(to_half_width("進撃の巨人 ３４"), "進撃の巨人 34");
    }

    #[test]
    fn test_half_width_input_unchanged() {
        assert_eq!(to_half_width("Vol.1 (Special)"), "Vol.1 (Special)");
    }

    #[test]
    fn test_full_width_punctuation_preserved() {
        // Only alphanumerics and the ideographic space are folded.
        assert_eq!(to_half_width("ＮＡＲＵＴＯ！"), "NARUTO！");
    }

    #[test]
    fn test_normalize_title_keeps_spaces() {
        assert_eq!(normalize_title("Ｍａｎｇａ\u{3000}Ｔｉｔｌｅ"), "Manga Title");
    }

    #[test]
    fn test_normalize_title_idempotent() {
        let once = normalize_title("Ｄｒ．ＳＴＯＮＥ\u{3000}１");
        assert_eq!(normalize_title(&once), once);
    }

    #[test]
    fn test_normalize_author_strips_all_spaces() {
        assert_eq!(normalize_author("尾田\u{3000}栄一郎"), "尾田栄一郎");
        assert_eq!(normalize_author("Ｅｉｉｃｈｉｒｏ Ｏｄａ"), "EiichiroOda");
    }

    #[test]
    fn test_normalize_author_never_contains_space() {
        for input in ["a b c", "ａ\u{3000}ｂ c", "\u{3000}\u{3000}", "  "] {
            assert!(!normalize_author(input).contains(' '));
        }
    }

    #[test]
    fn test_normalize_author_idempotent() {
        let once = normalize_author("荒川　弘");
        assert_eq!(normalize_author(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_half_width(""), "");
        assert_eq!(normalize_author(""), "");
    }
}
