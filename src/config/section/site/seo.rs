//! `[site.seo]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const DESCRIPTION_LIMIT: FieldPath = FieldPath::new("site.seo.description_limit");

/// Default maximum length of derived page descriptions, in characters.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Maximum length of a page description derived from page content.
    pub description_limit: usize,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

impl SeoConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.description_limit == 0 {
            diag.error(DESCRIPTION_LIMIT, "must be greater than 0");
        }
    }
}
