//! Developer inspection of page views.
//!
//! Outside the serving environment (`--inspect`), every resolved page view
//! is handed to an [`InspectHook`]. Hooks observe only; nothing reads back
//! from them.

use crate::config::{SiteConfig, cfg};
use crate::notion::{Block, RecordMap};
use crate::{debug, debug_do, log};

use super::url::page_path;

/// Observer of page views.
pub trait InspectHook {
    /// Called once per page view that reached a root block.
    fn inspect(&self, page_id: Option<&str>, block: &Block, record_map: &RecordMap);
}

/// Hook that writes a summary of the page view to the log.
///
/// Paths are resolved against the installed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogInspectHook;

impl LogInspectHook {
    /// One-line summary of a page view.
    fn summary(site: &SiteConfig, page_id: Option<&str>, block: &Block, record_map: &RecordMap) -> String {
        format!(
            "page {} -> block {} at {} ({:?}, {} children, {} blocks in map)",
            page_id.unwrap_or("<root>"),
            block.id,
            page_path(site, record_map, &block.id),
            block.kind,
            block.content.len(),
            record_map.block.len()
        )
    }
}

impl InspectHook for LogInspectHook {
    fn inspect(&self, page_id: Option<&str>, block: &Block, record_map: &RecordMap) {
        log!("inspect"; "{}", Self::summary(&cfg(), page_id, block, record_map));
        debug_do! {
            for (key, record) in record_map.block.iter() {
                match &record.value {
                    Some(b) => debug!("inspect"; "  {} {:?}", key, b.kind),
                    None => debug!("inspect"; "  {} <no value>", key),
                }
            }
        }
    }
}
