//! `[site.info]` configuration.
//!
//! Basic site information: name, domain, author, description.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const NAME: FieldPath = FieldPath::new("site.info.name");
const DOMAIN: FieldPath = FieldPath::new("site.info.domain");

/// Site metadata used for titles, canonical URLs and social tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name, used as the fallback page title and `og:site_name`.
    pub name: String,

    /// Bare domain the site is served from (e.g. "example.org").
    pub domain: String,

    /// Author name.
    pub author: String,

    /// Site description, the fallback page description.
    pub description: String,

    /// Language code (e.g., "en", "de").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            domain: String::new(),
            author: String::new(),
            description: String::new(),
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Trim surrounding whitespace and slashes from the domain.
    pub(crate) fn normalize(&mut self) {
        self.domain = self.domain.trim().trim_end_matches('/').to_string();
    }

    /// Author name, if non-empty.
    pub fn author(&self) -> Option<&str> {
        Some(self.author.trim()).filter(|s| !s.is_empty())
    }

    /// Site description, if non-empty.
    pub fn description(&self) -> Option<&str> {
        Some(self.description.trim()).filter(|s| !s.is_empty())
    }

    /// Validate site information.
    ///
    /// # Checks
    /// - `name` must be set
    /// - `domain` must be a bare host (no scheme, no path)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(NAME, "site name is empty");
        }

        if self.domain.is_empty() {
            diag.error_with_hint(DOMAIN, "site domain is empty", "e.g.: \"example.org\"");
            return;
        }

        if self.domain.contains("://") {
            diag.error_with_hint(
                DOMAIN,
                format!("'{}' contains a scheme", self.domain),
                "use the bare domain, e.g.: \"example.org\"",
            );
            return;
        }

        match url::Url::parse(&format!("https://{}", self.domain)) {
            Ok(parsed) if parsed.host_str().is_some() && parsed.path() == "/" => {}
            Ok(_) => diag.error_with_hint(
                DOMAIN,
                format!("'{}' is not a bare domain", self.domain),
                "remove any path, e.g.: \"example.org\"",
            ),
            Err(e) => diag.error(DOMAIN, format!("invalid domain: {}", e)),
        }
    }
}
