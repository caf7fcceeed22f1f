//! Open Graph and Twitter Card meta tags data.
//!
//! Provides pure data structures for the social tags of a page.
//! HTML rendering is handled by `seo/head.rs`.

use crate::page::ResolvedMetadata;

/// Attribute carrying the tag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(&'static str),
    /// `<meta property="...">`
    Property(&'static str),
}

impl MetaKey {
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Property(_) => "property",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name(key) | Self::Property(key) => key,
        }
    }
}

/// One `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTag<'a> {
    pub key: MetaKey,
    pub content: &'a str,
}

impl<'a> MetaTag<'a> {
    const fn name(key: &'static str, content: &'a str) -> Self {
        Self {
            key: MetaKey::Name(key),
            content,
        }
    }

    const fn property(key: &'static str, content: &'a str) -> Self {
        Self {
            key: MetaKey::Property(key),
            content,
        }
    }
}

/// Social tags of a rendered page, in emission order.
///
/// Description, image and URL tags are only present when the metadata has
/// a value for them.
pub fn social_tags(meta: &ResolvedMetadata) -> Vec<MetaTag<'_>> {
    let mut tags = vec![
        MetaTag::property("og:title", &meta.title),
        MetaTag::property("og:site_name", &meta.site_name),
        MetaTag::name("twitter:title", &meta.title),
        MetaTag::property("twitter:domain", &meta.domain),
    ];

    if let Some(handle) = &meta.twitter {
        tags.push(MetaTag::name("twitter:creator", handle));
    }

    if let Some(description) = &meta.description {
        tags.push(MetaTag::name("description", description));
        tags.push(MetaTag::property("og:description", description));
        tags.push(MetaTag::name("twitter:description", description));
    }

    tags.push(MetaTag::name("twitter:card", meta.twitter_card.as_str()));
    if let Some(image) = &meta.social_image {
        tags.push(MetaTag::name("twitter:image", image));
        tags.push(MetaTag::property("og:image", image));
    }

    if let Some(url) = &meta.canonical_url {
        tags.push(MetaTag::property("og:url", url));
        tags.push(MetaTag::property("twitter:url", url));
    }

    if let Some(author) = &meta.author {
        tags.push(MetaTag::name("author", author));
    }

    tags
}
