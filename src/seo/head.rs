//! `<head>` markup for page views.
//!
//! Emits one element per line. Attribute values and text are HTML-escaped.

use crate::page::{NotFoundPage, PageView, ResolvedMetadata};
use crate::utils::html::{escape, escape_attr, is_void_element};

use super::og::social_tags;

/// Line-oriented builder for head elements.
#[derive(Debug, Default)]
struct HeadWriter {
    out: String,
}

impl HeadWriter {
    fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: Option<&str>) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_attr(value));
            self.out.push('"');
        }
        self.out.push('>');

        if !is_void_element(tag) {
            if let Some(text) = text {
                self.out.push_str(&escape(text));
            }
            self.out.push_str("</");
            self.out.push_str(tag);
            self.out.push('>');
        }
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Head tags of a rendered page: social tags, canonical link, title.
pub fn render_head_tags(meta: &ResolvedMetadata) -> String {
    let mut head = HeadWriter::default();

    for tag in social_tags(meta) {
        head.element(
            "meta",
            &[(tag.key.attr(), tag.key.key()), ("content", tag.content)],
            None,
        );
    }
    if let Some(url) = &meta.canonical_url {
        head.element("link", &[("rel", "canonical"), ("href", url)], None);
    }
    head.element("title", &[], Some(&meta.title));

    head.finish()
}

/// Head tags of the not-found page.
pub fn render_not_found_head(page: &NotFoundPage) -> String {
    let mut head = HeadWriter::default();
    head.element("meta", &[("name", "robots"), ("content", "noindex")], None);
    head.element(
        "meta",
        &[("property", "og:site_name"), ("content", &page.site_name)],
        None,
    );
    head.element("title", &[], Some(&page.title));
    head.finish()
}

/// Head tags of any page view. A loading view has none.
pub fn render_view_head(view: &PageView<'_>) -> String {
    match view {
        PageView::Loading => String::new(),
        PageView::NotFound(page) => render_not_found_head(page),
        PageView::Rendered(page) => render_head_tags(&page.metadata),
    }
}
