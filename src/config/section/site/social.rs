//! `[site.social]` configuration.

use serde::{Deserialize, Serialize};

/// Social accounts linked from every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Twitter handle, with or without `@`.
    pub twitter: Option<String>,
    pub github: Option<String>,
    /// LinkedIn profile name (`linkedin.com/in/<name>`).
    pub linkedin: Option<String>,
}

/// Profile link of one social account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: String,
}

impl SocialConfig {
    /// Profile links of the configured accounts, in display order.
    pub fn links(&self) -> Vec<SocialLink> {
        [
            ("twitter", "https://twitter.com/", &self.twitter),
            ("github", "https://github.com/", &self.github),
            ("linkedin", "https://www.linkedin.com/in/", &self.linkedin),
        ]
        .into_iter()
        .filter_map(|(network, base, handle)| {
            let handle = handle.as_deref()?.trim().trim_start_matches('@');
            (!handle.is_empty()).then(|| SocialLink {
                network,
                url: format!("{base}{handle}"),
            })
        })
        .collect()
    }

    /// Twitter handle formatted for `twitter:creator` (`@handle`).
    pub fn twitter_handle(&self) -> Option<String> {
        let handle = self.twitter.as_deref()?.trim().trim_start_matches('@');
        (!handle.is_empty()).then(|| format!("@{handle}"))
    }
}
