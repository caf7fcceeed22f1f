//! Page id to site path resolution.
//!
//! # Path rules (first match wins)
//!
//! | Page                             | Path                              |
//! |----------------------------------|-----------------------------------|
//! | `site.notion.root_page_id`       | `/`                               |
//! | target of `[site.urls.overrides]`| the override path                 |
//! | titled block in the record map   | `/<title-slug>-<compact-id>`      |
//! | anything else                    | `/<compact-id>`                   |
//!
//! With `include_page_id = false` titled pages drop the id suffix. Strings
//! that are not Notion ids are slugified as-is, so every input yields a
//! stable path. A blank id maps to `/_`, never to the home page.

use url::{Url, form_urlencoded};

use crate::config::SiteConfig;
use crate::core::RuntimeMode;
use crate::notion::{NotionId, RecordMap};
use crate::utils::slug::{slugify_raw_id, slugify_title};

use super::meta::block_title;

/// Site-relative path of a page, without query string.
pub fn page_path(site: &SiteConfig, record_map: &RecordMap, page_id: &str) -> String {
    if site.site.notion.is_root(page_id) {
        return "/".to_string();
    }

    let Some(id) = NotionId::parse(page_id) else {
        return format!("/{}", slugify_raw_id(page_id));
    };

    if let Some(path) = site.site.urls.override_for(&id) {
        return path.to_string();
    }

    let title_slug = record_map
        .block(id.as_compact())
        .and_then(|block| block_title(block, record_map))
        .map(|title| slugify_title(&title))
        .filter(|slug| !slug.is_empty());

    match title_slug {
        Some(slug) if site.site.urls.include_page_id => format!("/{slug}-{id}"),
        Some(slug) => format!("/{slug}"),
        None => format!("/{id}"),
    }
}

/// Maps page ids to site-relative links for one page view.
#[derive(Debug, Clone)]
pub struct PageUrlMapper<'a> {
    site: &'a SiteConfig,
    record_map: &'a RecordMap,
    /// Encoded query string appended to every link (without `?`).
    query: Option<String>,
}

impl<'a> PageUrlMapper<'a> {
    pub fn new(site: &'a SiteConfig, record_map: &'a RecordMap, search_params: &[(String, String)]) -> Self {
        let query = (!search_params.is_empty()).then(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(search_params)
                .finish()
        });
        Self {
            site,
            record_map,
            query,
        }
    }

    /// Link to a page, with the search params of the current view.
    pub fn map(&self, page_id: &str) -> String {
        let path = page_path(self.site, self.record_map, page_id);
        match &self.query {
            Some(query) => format!("{path}?{query}"),
            None => path,
        }
    }

    /// Consume the mapper into a plain closure for renderers.
    pub fn into_fn(self) -> impl Fn(&str) -> String + 'a {
        move |page_id| self.map(page_id)
    }
}

/// Build the page link mapper of a page view.
pub fn map_page_url<'a>(
    site: &'a SiteConfig,
    record_map: &'a RecordMap,
    search_params: &[(String, String)],
) -> PageUrlMapper<'a> {
    PageUrlMapper::new(site, record_map, search_params)
}

/// Maps page ids to absolute canonical URLs (`https://<domain><path>`).
///
/// Yields `None` in development mode, when the record map has no root
/// block, or when the domain does not form a valid URL.
#[derive(Debug, Clone)]
pub struct CanonicalUrlMapper<'a> {
    site: &'a SiteConfig,
    record_map: &'a RecordMap,
    base: Option<Url>,
}

impl<'a> CanonicalUrlMapper<'a> {
    pub fn new(site: &'a SiteConfig, record_map: &'a RecordMap, mode: RuntimeMode) -> Self {
        let base = if mode.is_dev() {
            None
        } else {
            Url::parse(&format!("https://{}", site.site.info.domain)).ok()
        };
        Self {
            site,
            record_map,
            base,
        }
    }

    pub fn map(&self, page_id: &str) -> Option<String> {
        let base = self.base.as_ref()?;
        self.record_map.resolve_root(page_id)?;
        let path = page_path(self.site, self.record_map, page_id);
        base.join(&path).ok().map(String::from)
    }

    pub fn into_fn(self) -> impl Fn(&str) -> Option<String> + 'a {
        move |page_id| self.map(page_id)
    }
}

/// Build the canonical URL mapper of a page view.
pub fn canonical_page_url<'a>(
    site: &'a SiteConfig,
    record_map: &'a RecordMap,
    mode: RuntimeMode,
) -> CanonicalUrlMapper<'a> {
    CanonicalUrlMapper::new(site, record_map, mode)
}
