//! `[site.urls]` configuration.
//!
//! Page URL overrides map a site path to a page id:
//!
//! ```toml
//! [site.urls]
//! include_page_id = true
//!
//! [site.urls.overrides]
//! "/about" = "067dd719a912471ea9a3ac10710e7fdf"
//! "/contact" = "0be6efce-9daf-4268-8f65-c76b89f8eb27"
//! ```
//!
//! The table is inverted once at load time into `page id -> path`. When two
//! paths point at the same page the first one in path order wins and a
//! warning is reported.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::notion::NotionId;

const OVERRIDES: FieldPath = FieldPath::new("site.urls.overrides");

/// Bytes escaped in override path segments, matching what `url` escapes in
/// paths so that links and canonical URLs agree. `%` is kept so that
/// already-encoded paths pass through unchanged.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsConfig {
    /// Append the page id to title slugs (`/hello-world-067dd719...`).
    pub include_page_id: bool,

    /// Site path -> page id.
    pub overrides: BTreeMap<String, String>,

    /// Page id -> site path, built from `overrides` by [`UrlsConfig::invert`].
    #[serde(skip)]
    inverse: FxHashMap<NotionId, String>,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            include_page_id: true,
            overrides: BTreeMap::new(),
            inverse: FxHashMap::default(),
        }
    }
}

/// An override whose target page already has a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateOverride {
    pub id: NotionId,
    /// Path that won.
    pub kept: String,
    /// Path that was ignored.
    pub ignored: String,
}

/// Normalize an override path to `/segment[/segment...]`, percent-encoding
/// non-ASCII characters.
///
/// Returns `None` for the root path, which always belongs to the root page.
fn normalize_path(path: &str) -> Option<String> {
    let trimmed = path.trim().trim_matches('/');
    (!trimmed.is_empty()).then(|| format!("/{}", utf8_percent_encode(trimmed, PATH_SEGMENT)))
}

/// First character that cannot appear in an override path: `?` and `#`
/// would start a query or fragment, whitespace has no stable spelling.
fn forbidden_char(path: &str) -> Option<char> {
    path.trim()
        .chars()
        .find(|&c| c == '?' || c == '#' || c.is_whitespace())
}

impl UrlsConfig {
    /// Build the `id -> path` table. Invalid entries are skipped here and
    /// reported by [`UrlsConfig::validate`].
    pub(crate) fn invert(&mut self) -> Vec<DuplicateOverride> {
        let mut inverse = FxHashMap::default();
        let mut duplicates = Vec::new();

        for (path, raw_id) in &self.overrides {
            if forbidden_char(path).is_some() {
                continue;
            }
            let (Some(path), Some(id)) = (normalize_path(path), NotionId::parse(raw_id)) else {
                continue;
            };
            match inverse.get(&id) {
                Some(kept) => duplicates.push(DuplicateOverride {
                    id,
                    kept: String::clone(kept),
                    ignored: path,
                }),
                None => {
                    inverse.insert(id, path);
                }
            }
        }

        self.inverse = inverse;
        duplicates
    }

    /// Overridden path for a page, if any.
    pub fn override_for(&self, id: &NotionId) -> Option<&str> {
        self.inverse.get(id).map(String::as_str)
    }

    /// Inverted overrides sorted by path.
    pub fn inverse_sorted(&self) -> Vec<(&str, &NotionId)> {
        let mut entries: Vec<_> = self
            .inverse
            .iter()
            .map(|(id, path)| (path.as_str(), id))
            .collect();
        entries.sort();
        entries
    }

    /// Validate override entries.
    ///
    /// # Checks
    /// - path must not be the root path (error)
    /// - path must not contain `?`, `#` or whitespace (error)
    /// - target must be a valid page id (error)
    /// - two paths must not target the same page (warning, first path wins)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (path, raw_id) in &self.overrides {
            if normalize_path(path).is_none() {
                diag.error_with_hint(
                    OVERRIDES,
                    format!("'{}' overrides the root path", path),
                    "the root path always serves site.notion.root_page_id",
                );
            }
            if let Some(c) = forbidden_char(path) {
                diag.error_with_hint(
                    OVERRIDES,
                    format!("'{}' contains {:?}, which is not allowed in a path", path, c),
                    "use '-' between words and leave out query strings and fragments",
                );
            }
            if NotionId::parse(raw_id).is_none() {
                diag.error(
                    OVERRIDES,
                    format!("'{}' maps to '{}', which is not a valid notion id", path, raw_id),
                );
            }
        }

        let mut inverted = self.clone();
        for dup in inverted.invert() {
            diag.warn(
                OVERRIDES,
                format!(
                    "page {} is mapped by both '{}' and '{}', using '{}'",
                    dup.id, dup.kept, dup.ignored, dup.kept
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const ABOUT: &str = "067dd719a912471ea9a3ac10710e7fdf";
    const CONTACT: &str = "0be6efce9daf42688f65c76b89f8eb27";

    fn id(raw: &str) -> NotionId {
        NotionId::parse(raw).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.site.urls.include_page_id);
        assert!(config.site.urls.overrides.is_empty());
    }

    #[test]
    fn test_inverted_on_load() {
        let config = test_parse_config(&format!(
            "[site.urls.overrides]\n\"/about\" = \"{ABOUT}\"\n\"contact/\" = \"0be6efce-9daf-4268-8f65-c76b89f8eb27\""
        ));
        let urls = &config.site.urls;
        assert_eq!(urls.override_for(&id(ABOUT)), Some("/about"));
        assert_eq!(urls.override_for(&id(CONTACT)), Some("/contact"));
        assert_eq!(urls.inverse_sorted(), vec![("/about", &id(ABOUT)), ("/contact", &id(CONTACT))]);
    }

    #[test]
    fn test_duplicate_target_first_path_wins() {
        let mut urls = UrlsConfig::default();
        urls.overrides.insert("/zeta".into(), ABOUT.into());
        urls.overrides.insert("/alpha".into(), ABOUT.into());

        let duplicates = urls.invert();
        assert_eq!(urls.override_for(&id(ABOUT)), Some("/alpha"));
        assert_eq!(
            duplicates,
            vec![DuplicateOverride {
                id: id(ABOUT),
                kept: "/alpha".into(),
                ignored: "/zeta".into(),
            }]
        );
    }

    #[test]
    fn test_duplicate_target_is_warning() {
        let mut urls = UrlsConfig::default();
        urls.overrides.insert("/a".into(), ABOUT.into());
        urls.overrides.insert("/b".into(), ABOUT.into());

        let mut diag = ConfigDiagnostics::new();
        urls.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].message.contains("using '/a'"));
    }

    #[test]
    fn test_invalid_entries() {
        let mut urls = UrlsConfig::default();
        urls.overrides.insert("/".into(), ABOUT.into());
        urls.overrides.insert("/broken".into(), "not-an-id".into());

        let mut diag = ConfigDiagnostics::new();
        urls.validate(&mut diag);
        assert_eq!(diag.error_count(), 2);

        urls.invert();
        assert!(urls.inverse_sorted().is_empty());
    }

    #[test]
    fn test_query_fragment_and_whitespace_rejected() {
        let mut urls = UrlsConfig::default();
        urls.overrides.insert("/faq?x".into(), ABOUT.into());
        urls.overrides.insert("/faq#top".into(), CONTACT.into());
        urls.overrides.insert("/über uns".into(), "9ad8a41d862c436383037f318dfe2a7a".into());

        let mut diag = ConfigDiagnostics::new();
        urls.validate(&mut diag);
        assert_eq!(diag.error_count(), 3);

        urls.invert();
        assert!(urls.inverse_sorted().is_empty());
    }

    #[test]
    fn test_non_ascii_path_is_encoded() {
        let config = test_parse_config(&format!("[site.urls.overrides]\n\"/über\" = \"{ABOUT}\""));
        assert_eq!(config.site.urls.override_for(&id(ABOUT)), Some("/%C3%BCber"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/about"), Some("/about".into()));
        assert_eq!(normalize_path("about/"), Some("/about".into()));
        assert_eq!(normalize_path("/blog/post/"), Some("/blog/post".into()));
        assert_eq!(normalize_path("/"), None);
        assert_eq!(normalize_path("  "), None);
        assert_eq!(normalize_path("/caf%C3%A9"), Some("/caf%C3%A9".into()));
    }
}
