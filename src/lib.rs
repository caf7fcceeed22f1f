//! notion-press: page resolution and social metadata for Notion-backed sites.
//!
//! Given a record map (the block graph of one page view) and a requested
//! page id, [`page::render_page`] decides whether the page exists and
//! assembles its title, description, canonical URL and social image, along
//! with the resolvers that map page ids to site paths and image references
//! to public URLs.

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod notion;
pub mod page;
pub mod seo;
pub mod utils;
