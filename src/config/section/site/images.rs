//! `[site.images]` configuration.
//!
//! Site-wide image defaults and the optional image proxy.
//!
//! ```toml
//! [site.images]
//! default_page_cover = "https://example.org/cover.png"
//! default_page_cover_position = 0.5
//! cdn_host = "https://images.example.org"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const COVER_POSITION: FieldPath = FieldPath::new("site.images.default_page_cover_position");
const CDN_HOST: FieldPath = FieldPath::new("site.images.cdn_host");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Icon used for pages without one.
    pub default_page_icon: Option<String>,

    /// Cover used for pages without one; also the fallback social image.
    pub default_page_cover: Option<String>,

    /// Vertical cover position in `[0, 1]`.
    pub default_page_cover_position: f64,

    /// Image CDN host all image URLs are routed through (optional).
    pub cdn_host: Option<String>,

    /// Emit low-quality preview placeholders for images.
    pub preview_images: bool,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            default_page_icon: None,
            default_page_cover: None,
            default_page_cover_position: 0.5,
            cdn_host: None,
            preview_images: false,
        }
    }
}

impl ImagesConfig {
    /// Drop blank values and trailing slashes so use sites never re-check.
    pub(crate) fn normalize(&mut self) {
        fn non_blank(value: &mut Option<String>) {
            *value = value
                .take()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
        }

        non_blank(&mut self.default_page_icon);
        non_blank(&mut self.default_page_cover);
        non_blank(&mut self.cdn_host);
        if let Some(host) = &mut self.cdn_host {
            *host = host.trim_end_matches('/').to_string();
        }
    }

    /// Image CDN host without trailing slash.
    #[inline]
    pub fn cdn_host(&self) -> Option<&str> {
        self.cdn_host.as_deref()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(0.0..=1.0).contains(&self.default_page_cover_position) {
            diag.error(
                COVER_POSITION,
                format!(
                    "{} is out of range, must be between 0 and 1",
                    self.default_page_cover_position
                ),
            );
        }

        if let Some(host) = &self.cdn_host {
            match url::Url::parse(host) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => diag.error_with_hint(
                    CDN_HOST,
                    format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                    "use format like https://images.example.org",
                ),
                Err(e) => diag.error_with_hint(
                    CDN_HOST,
                    format!("invalid URL: {}", e),
                    "use format like https://images.example.org",
                ),
            }
        }
    }
}
