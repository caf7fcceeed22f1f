//! Social and search metadata markup.

pub mod head;
pub mod og;

pub use head::{render_head_tags, render_not_found_head, render_view_head};
pub use og::{MetaKey, MetaTag, social_tags};
