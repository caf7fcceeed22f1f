//! Page view resolution.
//!
//! A page view ends in exactly one of three states, decided in order:
//!
//! 1. [`PageView::Loading`]: the router is still fetching the page.
//! 2. [`PageView::NotFound`]: an upstream error, an empty record map, no
//!    root block, or a root block outside `site.notion.root_space_id`.
//! 3. [`PageView::Rendered`]: metadata plus link and image resolvers for the
//!    presentation layer.
//!
//! Rendering never fails; degenerate input ends in `NotFound`.

use serde::Serialize;

use crate::config::{SiteConfig, SocialLink};
use crate::debug;
use crate::notion::{Block, RecordMap};

use super::image::{ImageUrlMapper, map_image_url};
use super::inspect::InspectHook;
use super::meta::{page_description, page_title};
use super::url::{PageUrlMapper, canonical_page_url, map_page_url};

/// Title of the not-found page.
const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Inputs of one page view.
#[derive(Debug, Clone, Copy)]
pub struct PageViewRequest<'a> {
    pub site: &'a SiteConfig,
    pub record_map: &'a RecordMap,
    /// Requested page; `None` is the root page.
    pub page_id: Option<&'a str>,
    /// Error reported by the fetcher that produced `record_map`.
    pub error: Option<&'a str>,
    /// The router is serving a fallback while the page loads.
    pub is_fallback: bool,
    /// Query parameters carried over to every page link.
    pub search_params: &'a [(String, String)],
}

impl<'a> PageViewRequest<'a> {
    pub fn new(site: &'a SiteConfig, record_map: &'a RecordMap) -> Self {
        Self {
            site,
            record_map,
            page_id: None,
            error: None,
            is_fallback: false,
            search_params: &[],
        }
    }

    pub fn with_page_id(mut self, page_id: &'a str) -> Self {
        self.page_id = Some(page_id);
        self
    }

    pub fn with_error(mut self, error: &'a str) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_fallback(mut self, is_fallback: bool) -> Self {
        self.is_fallback = is_fallback;
        self
    }

    pub fn with_search_params(mut self, search_params: &'a [(String, String)]) -> Self {
        self.search_params = search_params;
        self
    }

    /// Requested page id, defaulting to the configured root page.
    pub fn requested_id(&self) -> String {
        match (self.page_id, &self.site.site.notion.root_page_id) {
            (Some(id), _) => id.to_string(),
            (None, Some(root)) => root.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Twitter card layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    SummaryLargeImage,
}

impl TwitterCard {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Display and sharing metadata of a rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMetadata {
    pub title: String,
    pub site_name: String,
    pub domain: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
    pub social_image: Option<String>,
    /// `@handle` of the site's twitter account.
    pub twitter: Option<String>,
    pub twitter_card: TwitterCard,
    pub author: Option<String>,
}

/// Site-wide footer content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    /// `Copyright <author>`, when an author is configured.
    pub copyright: Option<String>,
    pub social: Vec<SocialLink>,
}

impl Footer {
    fn new(site: &SiteConfig) -> Self {
        Self {
            copyright: site.site.info.author().map(|author| format!("Copyright {author}")),
            social: site.site.social.links(),
        }
    }
}

/// The not-found page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundPage {
    pub title: String,
    pub site_name: String,
    pub page_id: Option<String>,
    pub error: Option<String>,
}

impl NotFoundPage {
    fn new(request: &PageViewRequest<'_>) -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            site_name: request.site.site.info.name.clone(),
            page_id: request.page_id.map(str::to_string),
            error: request.error.map(str::to_string),
        }
    }
}

/// A page with a root block, ready for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage<'a> {
    pub page_id: String,
    #[serde(skip)]
    pub block: &'a Block,
    pub block_id: String,
    pub metadata: ResolvedMetadata,
    /// The root page of the site.
    pub is_index_page: bool,
    /// Page icon: emoji, or resolved image URL.
    pub icon: Option<String>,
    pub cover_position: f64,
    pub preview_images: bool,
    pub footer: Footer,
    #[serde(skip)]
    pub page_url: PageUrlMapper<'a>,
    #[serde(skip)]
    pub image_url: ImageUrlMapper<'a>,
}

/// Outcome of a page view.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageView<'a> {
    Loading,
    NotFound(NotFoundPage),
    Rendered(RenderedPage<'a>),
}

impl PageView<'_> {
    pub const fn state(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::NotFound(_) => "not_found",
            Self::Rendered(_) => "rendered",
        }
    }
}

/// Resolve a page view.
///
/// `hook` receives the root block when the process is not serving requests
/// (`RuntimeMode::server == false`).
pub fn render_page<'a>(request: &PageViewRequest<'a>, hook: Option<&dyn InspectHook>) -> PageView<'a> {
    if request.is_fallback {
        return PageView::Loading;
    }

    let site = request.site;
    let record_map = request.record_map;
    let page_id = request.requested_id();

    if let Some(error) = request.error {
        debug!("render"; "page {} failed upstream: {}", page_id, error);
        return PageView::NotFound(NotFoundPage::new(request));
    }
    if record_map.is_empty() {
        debug!("render"; "page {}: empty record map", page_id);
        return PageView::NotFound(NotFoundPage::new(request));
    }
    let Some(block) = record_map.resolve_root(&page_id) else {
        debug!("render"; "page {}: no root block", page_id);
        return PageView::NotFound(NotFoundPage::new(request));
    };
    if let (Some(space), Some(block_space)) = (&site.site.notion.root_space_id, &block.space_id)
        && !space.matches(block_space)
    {
        debug!("render"; "page {} belongs to workspace {}", page_id, block_space);
        return PageView::NotFound(NotFoundPage::new(request));
    }

    if !site.mode.is_server()
        && let Some(hook) = hook
    {
        hook.inspect(request.page_id, block, record_map);
    }

    let social_image = map_image_url(site, None, block);
    let metadata = ResolvedMetadata {
        title: page_title(block, record_map, site),
        site_name: site.site.info.name.clone(),
        domain: site.site.info.domain.clone(),
        description: page_description(block, record_map, site.site.seo.description_limit)
            .or_else(|| site.site.info.description().map(str::to_string)),
        canonical_url: canonical_page_url(site, record_map, site.mode).map(&page_id),
        twitter_card: if social_image.is_some() {
            TwitterCard::SummaryLargeImage
        } else {
            TwitterCard::Summary
        },
        social_image,
        twitter: site.site.social.twitter_handle(),
        author: site.site.info.author().map(str::to_string),
    };

    PageView::Rendered(RenderedPage {
        is_index_page: site.site.notion.is_root(&page_id),
        icon: page_icon(site, block),
        cover_position: block
            .format
            .page_cover_position
            .unwrap_or(site.site.images.default_page_cover_position),
        preview_images: site.site.images.preview_images,
        footer: Footer::new(site),
        page_url: map_page_url(site, record_map, request.search_params),
        image_url: ImageUrlMapper::new(site),
        block_id: block.id.clone(),
        page_id,
        block,
        metadata,
    })
}

/// Block icon or the site default. Image icons are resolved; emoji pass through.
fn page_icon(site: &SiteConfig, block: &Block) -> Option<String> {
    let icon = block
        .format
        .page_icon
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(site.site.images.default_page_icon.as_deref())?;

    if icon.starts_with('/') || icon.contains("://") || icon.starts_with("data:") {
        map_image_url(site, Some(icon), block)
    } else {
        Some(icon.to_string())
    }
}
