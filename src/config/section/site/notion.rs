//! `[site.notion]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::notion::NotionId;

const ROOT_PAGE_ID: FieldPath = FieldPath::new("site.notion.root_page_id");

/// Where the site's content lives in the workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// The site's root page, served at `/` (required).
    pub root_page_id: Option<NotionId>,

    /// Restrict pages to a single workspace (optional).
    pub root_space_id: Option<NotionId>,
}

impl NotionConfig {
    /// Check whether a raw id refers to the root page.
    pub fn is_root(&self, raw_id: &str) -> bool {
        self.root_page_id
            .as_ref()
            .is_some_and(|root| root.matches(raw_id))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.root_page_id.is_none() {
            diag.error_with_hint(
                ROOT_PAGE_ID,
                "root page id is not configured",
                "copy the 32-character id from the root page URL",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_uuid_and_compact_are_equal() {
        let config = test_parse_config(
            "[site.notion]\nroot_page_id = \"9ad8a41d-862c-4363-8303-7f318dfe2a7a\"",
        );
        let notion = &config.site.notion;
        assert_eq!(
            notion.root_page_id.as_ref().unwrap().as_compact(),
            "9ad8a41d862c436383037f318dfe2a7a"
        );
        assert!(notion.is_root("9ad8a41d862c436383037f318dfe2a7a"));
        assert!(!notion.is_root("067dd719a912471ea9a3ac10710e7fdf"));
    }

    #[test]
    fn test_invalid_id_is_parse_error() {
        let result = crate::config::SiteConfig::from_str("[site.notion]\nroot_page_id = \"home\"");
        assert!(result.is_err());
    }
}
