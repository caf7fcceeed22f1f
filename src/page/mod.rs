//! Page view pipeline: root resolution, URLs, images, and metadata.
//!
//! ```text
//! record map + page id
//!   └─ render_page ──┬─ url      page id -> site path / canonical URL
//!                    ├─ image    raw image reference -> public URL
//!                    └─ meta     title, description
//! ```

pub mod image;
pub mod inspect;
pub mod links;
pub mod meta;
pub mod render;
pub mod url;

pub use image::{ImageUrlMapper, map_image_url};
pub use inspect::{InspectHook, LogInspectHook};
pub use links::{ImageLink, ImageSource, LinkReport, PageLink, PathConflict, collect_links};
pub use meta::{block_title, page_description, page_title};
pub use render::{
    Footer, NotFoundPage, PageView, PageViewRequest, RenderedPage, ResolvedMetadata, TwitterCard,
    render_page,
};
pub use self::url::{CanonicalUrlMapper, PageUrlMapper, canonical_page_url, map_page_url, page_path};
