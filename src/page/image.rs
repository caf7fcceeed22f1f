//! Image reference resolution.
//!
//! Raw image references in a record map are often not fetchable outside the
//! workspace: relative asset paths, or signed storage URLs that expire. This
//! module turns them into public URLs, routing workspace-internal files
//! through Notion's image proxy and optionally through an image CDN.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::config::SiteConfig;
use crate::notion::{Block, NotionId};

/// Origin of relative asset paths and of the image proxy.
const NOTION_ORIGIN: &str = "https://www.notion.so";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Storage hosts that only serve files to a signed-in workspace session.
fn is_workspace_internal(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    match host {
        "secure.notion-static.com" | "file.notion.so" => true,
        _ if host.ends_with(".amazonaws.com") => {
            host.starts_with("prod-files-secure.s3.")
                || (host.starts_with("s3") && url.path().starts_with("/secure.notion-static.com/"))
        }
        _ => false,
    }
}

/// Route a workspace-internal file through the image proxy, which resolves
/// it by the owning block.
fn proxy_url(url: &str, block: &Block) -> String {
    let block_id = NotionId::parse(&block.id)
        .map(|id| id.to_uuid())
        .unwrap_or_else(|| block.id.clone());
    format!(
        "{NOTION_ORIGIN}/image/{}?table={}&id={}&cache=v2",
        encode_component(url),
        encode_component(block.image_table()),
        encode_component(&block_id),
    )
}

/// Resolve an image reference for `block`.
///
/// # Policy (in order)
///
/// 1. Missing or blank `raw` falls back to the block's cover, then to
///    `site.images.default_page_cover`; with neither there is no image.
/// 2. `data:` URLs and URLs already on the CDN host are returned unchanged.
///    Relative `/images/...` paths become absolute Notion URLs.
/// 3. Workspace-internal files are routed through the image proxy.
/// 4. With `site.images.cdn_host` set the result is routed through the CDN.
///
/// Input that does not parse as a URL is returned as-is.
pub fn map_image_url(site: &SiteConfig, raw: Option<&str>, block: &Block) -> Option<String> {
    let images = &site.site.images;
    let url = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| block.page_cover())
        .or(images.default_page_cover.as_deref())?;

    if url.starts_with("data:") {
        return Some(url.to_string());
    }
    if let Some(cdn) = images.cdn_host()
        && url
            .strip_prefix(cdn)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    {
        return Some(url.to_string());
    }

    let absolute = if url.starts_with("/images") {
        format!("{NOTION_ORIGIN}{url}")
    } else {
        url.to_string()
    };

    let Ok(parsed) = Url::parse(&absolute) else {
        return Some(url.to_string());
    };

    let resolved = if is_workspace_internal(&parsed) {
        proxy_url(&absolute, block)
    } else {
        absolute
    };

    Some(match images.cdn_host() {
        Some(cdn) => format!("{cdn}/{}", encode_component(&resolved)),
        None => resolved,
    })
}

/// Image resolver bound to a site, handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct ImageUrlMapper<'a> {
    site: &'a SiteConfig,
}

impl<'a> ImageUrlMapper<'a> {
    pub const fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    #[inline]
    pub fn map(&self, raw: Option<&str>, block: &Block) -> Option<String> {
        map_image_url(self.site, raw, block)
    }

    pub fn into_fn(self) -> impl Fn(Option<&str>, &Block) -> Option<String> + 'a {
        move |raw, block| self.map(raw, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::notion::BlockFormat;

    const BLOCK_UUID: &str = "067dd719-a912-471e-a9a3-ac10710e7fdf";

    fn block() -> Block {
        Block {
            id: BLOCK_UUID.into(),
            parent_table: Some("block".into()),
            ..Default::default()
        }
    }

    fn covered(cover: &str) -> Block {
        Block {
            format: BlockFormat {
                page_cover: Some(cover.into()),
                ..Default::default()
            },
            ..block()
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn nothing_to_show() {
            let site = test_parse_config("");
            assert_eq!(map_image_url(&site, None, &block()), None);
            assert_eq!(map_image_url(&site, Some("  "), &block()), None);
        }

        #[test]
        fn site_default_cover() {
            let site = test_parse_config(
                "[site.images]\ndefault_page_cover = \"https://cdn.example.org/cover.png\"",
            );
            assert_eq!(
                map_image_url(&site, None, &block()).as_deref(),
                Some("https://cdn.example.org/cover.png")
            );
        }

        #[test]
        fn block_cover_before_site_default() {
            let site = test_parse_config(
                "[site.images]\ndefault_page_cover = \"https://cdn.example.org/cover.png\"",
            );
            let b = covered("https://images.unsplash.com/photo.jpg");
            assert_eq!(
                map_image_url(&site, None, &b).as_deref(),
                Some("https://images.unsplash.com/photo.jpg")
            );
        }
    }

    mod hosts {
        use super::*;

        #[test]
        fn public_url_unchanged() {
            let site = test_parse_config("");
            let url = "https://images.unsplash.com/photo-1?w=800&q=80";
            assert_eq!(map_image_url(&site, Some(url), &block()).as_deref(), Some(url));
        }

        #[test]
        fn data_url_unchanged() {
            let site = test_parse_config("[site.images]\ncdn_host = \"https://img.example.org\"");
            let url = "data:image/png;base64,iVBORw0KGgo=";
            assert_eq!(map_image_url(&site, Some(url), &block()).as_deref(), Some(url));
        }

        #[test]
        fn relative_asset_path() {
            let site = test_parse_config("");
            assert_eq!(
                map_image_url(&site, None, &covered("/images/page-cover/gradients_8.png")).as_deref(),
                Some("https://www.notion.so/images/page-cover/gradients_8.png")
            );
        }

        #[test]
        fn internal_file_is_proxied() {
            let site = test_parse_config("");
            let raw = "https://s3-us-west-2.amazonaws.com/secure.notion-static.com/abc/photo.png";
            let b = Block {
                id: "067dd719a912471ea9a3ac10710e7fdf".into(),
                ..block()
            };
            assert_eq!(
                map_image_url(&site, Some(raw), &b).as_deref(),
                Some(
                    "https://www.notion.so/image/https%3A%2F%2Fs3-us-west-2.amazonaws.com%2Fsecure.notion-static.com%2Fabc%2Fphoto.png?table=block&id=067dd719-a912-471e-a9a3-ac10710e7fdf&cache=v2"
                )
            );
        }

        #[test]
        fn internal_hosts() {
            let internal = [
                "https://secure.notion-static.com/a.png",
                "https://file.notion.so/f/s/a.png",
                "https://prod-files-secure.s3.us-west-2.amazonaws.com/a/b.png",
                "https://s3.us-west-2.amazonaws.com/secure.notion-static.com/a.png",
            ];
            for raw in internal {
                assert!(is_workspace_internal(&Url::parse(raw).unwrap()), "{raw}");
            }

            let public = [
                "https://images.unsplash.com/a.png",
                "https://s3.us-west-2.amazonaws.com/other-bucket/a.png",
                "https://www.notion.so/images/page-cover/a.png",
            ];
            for raw in public {
                assert!(!is_workspace_internal(&Url::parse(raw).unwrap()), "{raw}");
            }
        }

        #[test]
        fn unparsable_returned_as_is() {
            let site = test_parse_config("[site.images]\ncdn_host = \"https://img.example.org\"");
            assert_eq!(
                map_image_url(&site, Some("not a url"), &block()).as_deref(),
                Some("not a url")
            );
        }
    }

    mod cdn {
        use super::*;

        #[test]
        fn routes_through_cdn() {
            let site = test_parse_config("[site.images]\ncdn_host = \"https://img.example.org/\"");
            assert_eq!(
                map_image_url(&site, Some("https://a.dev/x.png"), &block()).as_deref(),
                Some("https://img.example.org/https%3A%2F%2Fa.dev%2Fx.png")
            );
        }

        #[test]
        fn already_on_cdn() {
            let site = test_parse_config("[site.images]\ncdn_host = \"https://img.example.org\"");
            let url = "https://img.example.org/https%3A%2F%2Fa.dev%2Fx.png";
            assert_eq!(map_image_url(&site, Some(url), &block()).as_deref(), Some(url));
        }
    }

    #[test]
    fn test_mapper_matches_function() {
        let site = test_parse_config("");
        let mapper = ImageUrlMapper::new(&site).into_fn();
        let b = covered("/images/a.png");
        assert_eq!(mapper(None, &b), map_image_url(&site, None, &b));
    }
}
