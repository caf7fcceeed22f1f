//! Link report of a record map.
//!
//! Lists what the presentation layer would emit for every page link and
//! image in a record map, in document order:
//! - `pages`: page id -> site path
//! - `images`: image/cover block -> resolved URL
//! - `conflicts`: paths claimed by more than one page

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::notion::{BlockRole, BlockType, RecordMap};

use super::image::map_image_url;
use super::url::map_page_url;

/// A page and its site path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub id: String,
    pub path: String,
}

/// Where an image reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// An image block.
    Image,
    /// A page cover.
    Cover,
}

/// An image reference and the URL it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageLink {
    pub block_id: String,
    pub source: ImageSource,
    pub raw: String,
    pub url: Option<String>,
}

/// A site path shared by several pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathConflict {
    pub path: String,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub pages: Vec<PageLink>,
    pub images: Vec<ImageLink>,
    pub conflicts: Vec<PathConflict>,
}

impl LinkReport {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.images.is_empty()
    }
}

/// Collect page links and image URLs of every block in `record_map`.
pub fn collect_links(
    site: &SiteConfig,
    record_map: &RecordMap,
    search_params: &[(String, String)],
) -> LinkReport {
    let page_url = map_page_url(site, record_map, search_params);
    let mut report = LinkReport::default();

    for block in record_map.block.values() {
        match block.kind.role() {
            BlockRole::Page => {
                report.pages.push(PageLink {
                    id: block.id.clone(),
                    path: page_url.map(&block.id),
                });
                if let Some(cover) = block.page_cover() {
                    report.images.push(ImageLink {
                        block_id: block.id.clone(),
                        source: ImageSource::Cover,
                        raw: cover.to_string(),
                        url: map_image_url(site, Some(cover), block),
                    });
                }
            }
            BlockRole::Opaque if block.kind == BlockType::Image => {
                if let Some(raw) = block.image_source() {
                    report.images.push(ImageLink {
                        block_id: block.id.clone(),
                        source: ImageSource::Image,
                        url: map_image_url(site, Some(&raw), block),
                        raw,
                    });
                }
            }
            BlockRole::Text | BlockRole::Opaque => {}
        }
    }

    report.conflicts = find_conflicts(&report.pages);
    report
}

/// Paths mapped from more than one page, in first-seen order.
fn find_conflicts(pages: &[PageLink]) -> Vec<PathConflict> {
    let mut by_path: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    let mut order = Vec::new();

    for page in pages {
        let path = page.path.split('?').next().unwrap_or(&page.path);
        let ids = by_path.entry(path).or_insert_with(|| {
            order.push(path);
            Vec::new()
        });
        ids.push(&page.id);
    }

    order
        .into_iter()
        .filter_map(|path| {
            let ids = &by_path[path];
            (ids.len() > 1).then(|| PathConflict {
                path: path.to_string(),
                ids: ids.iter().map(|id| id.to_string()).collect(),
            })
        })
        .collect()
}
