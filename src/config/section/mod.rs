//! Configuration section definitions.
//!
//! | Module | TOML Section | Purpose                                        |
//! |--------|--------------|------------------------------------------------|
//! | `site` | `[site]`     | Site info, root page, images, URL overrides    |

pub mod site;

pub use site::{
    DEFAULT_DESCRIPTION_LIMIT, DuplicateOverride, ImagesConfig, NotionConfig, SeoConfig,
    SiteInfoConfig, SiteSectionConfig, SocialConfig, SocialLink, UrlsConfig,
};
