//! URL slugification for page titles.
//!
//! Titles are transliterated to ASCII (`deunicode`), lowercased, and every
//! run of non-alphanumeric characters collapses into a single `-`.

use deunicode::deunicode;

/// Separator used between slug words.
const SEPARATOR: char = '-';

/// Segment for a blank identifier. Neither slugs nor percent-encoded
/// fallbacks can produce it.
pub const BLANK_SEGMENT: &str = "_";

/// Slugify a page title into a single URL path segment.
///
/// Returns an empty string when nothing URL-safe remains
/// (e.g. a title made only of punctuation).
///
/// # Examples
/// ```ignore
/// slugify_title("Hello, World!")    -> "hello-world"
/// slugify_title("  Über  Rust  ")   -> "uber-rust"
/// slugify_title("🚀 Launch")        -> "rocket-launch"
/// slugify_title("?!")               -> ""
/// ```
pub fn slugify_title(title: &str) -> String {
    let ascii = deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Slugify an arbitrary identifier that is not a valid page id.
///
/// Unlike [`slugify_title`], an empty result falls back to the raw input
/// percent-encoded, and a blank input maps to [`BLANK_SEGMENT`], so the
/// result is never empty.
pub fn slugify_raw_id(raw: &str) -> String {
    if raw.trim().is_empty() {
        return BLANK_SEGMENT.to_string();
    }
    let slug = slugify_title(raw);
    if !slug.is_empty() {
        return slug;
    }
    use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
    utf8_percent_encode(raw.trim(), NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify_title("Hello, World"), "hello-world");
    }

    #[test]
    fn test_collapses_separators() {
        assert_eq!(slugify_title("a  --  b"), "a-b");
    }

    #[test]
    fn test_trims_leading_and_trailing() {
        assert_eq!(slugify_title("  -Rust- "), "rust");
    }

    #[test]
    fn test_transliterates_unicode() {
        assert_eq!(slugify_title("Über Straße"), "uber-strasse");
    }

    #[test]
    fn test_punctuation_only_is_empty() {
        assert_eq!(slugify_title("?! ..."), "");
    }

    #[test]
    fn test_raw_id_keeps_alphanumerics() {
        assert_eq!(slugify_raw_id("Not An Id"), "not-an-id");
    }

    #[test]
    fn test_raw_id_never_empty() {
        assert!(!slugify_raw_id("???").is_empty());
        assert_eq!(slugify_raw_id("_"), "%5F");
    }

    #[test]
    fn test_blank_raw_id() {
        assert_eq!(slugify_raw_id(""), BLANK_SEGMENT);
        assert_eq!(slugify_raw_id("  "), BLANK_SEGMENT);
    }
}
