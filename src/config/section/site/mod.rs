//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! name = "Progressive Perspektive"
//! domain = "progressiveperspektive.org"
//! author = "Progressive Perspektive"
//! description = "Example site description"
//!
//! [site.notion]
//! root_page_id = "9ad8a41d862c436383037f318dfe2a7a"
//!
//! [site.social]
//! twitter = "example"
//!
//! [site.images]
//! default_page_cover = "https://example.org/cover.png"
//! cdn_host = "https://images.example.org"
//!
//! [site.urls.overrides]
//! "/about" = "067dd719a912471ea9a3ac10710e7fdf"
//!
//! [site.seo]
//! description_limit = 300
//! ```

mod images;
mod info;
mod notion;
mod seo;
mod social;
mod urls;

pub use images::ImagesConfig;
pub use info::SiteInfoConfig;
pub use notion::NotionConfig;
pub use seo::{DEFAULT_DESCRIPTION_LIMIT, SeoConfig};
pub use social::{SocialConfig, SocialLink};
pub use urls::{DuplicateOverride, UrlsConfig};

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (name, domain, author, description).
    pub info: SiteInfoConfig,

    /// Root page and workspace.
    pub notion: NotionConfig,

    /// Social accounts and social image captions.
    pub social: SocialConfig,

    /// Default icon/cover and image CDN.
    pub images: ImagesConfig,

    /// Page URL overrides.
    pub urls: UrlsConfig,

    /// Description derivation.
    pub seo: SeoConfig,
}

impl SiteSectionConfig {
    /// Normalize values and build derived tables.
    pub(crate) fn prepare(&mut self) {
        self.info.normalize();
        self.images.normalize();
        self.urls.invert();
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(diag);
        self.notion.validate(diag);
        self.images.validate(diag);
        self.urls.validate(diag);
        self.seo.validate(diag);
    }
}
