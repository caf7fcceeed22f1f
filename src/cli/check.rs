//! `check` command: configuration summary.
//!
//! Loading already validated the configuration; this prints what it
//! resolved to so that override tables can be reviewed.

use std::fmt::Write;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{SiteConfig, cfg};
use crate::log;
use crate::utils::plural::plural_count;

pub fn run_check() -> Result<()> {
    let config = cfg();
    log!("check"; "{} is valid", config.config_path.display());
    print!("{}", summary(&config));
    Ok(())
}

/// Human-readable summary of the resolved configuration.
fn summary(config: &SiteConfig) -> String {
    let site = &config.site;
    let mut out = String::new();

    let root = site
        .notion
        .root_page_id
        .as_ref()
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let cdn = site.images.cdn_host().unwrap_or("-");

    writeln!(out, "{} {} ({})", "site".bold(), site.info.name, site.info.domain).ok();
    writeln!(out, "{} {}", "root".bold(), root).ok();
    writeln!(out, "{} {}", "cdn".bold(), cdn).ok();

    let overrides = site.urls.inverse_sorted();
    writeln!(out, "{}", plural_count(overrides.len(), "override").bold()).ok();
    for (path, id) in overrides {
        writeln!(out, "  {path} -> {id}").ok();
    }
    out
}
