//! `render` command: resolve one page view.

use anyhow::Result;

use crate::config::{SiteConfig, cfg};
use crate::debug;
use crate::notion::RecordMap;
use crate::page::{InspectHook, LogInspectHook, PageViewRequest, render_page};
use crate::seo::render_view_head;

use super::args::{RenderArgs, RenderFormat};
use super::common::{read_record_map, to_json, write_output};

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let config = cfg();
    let record_map = read_record_map(&args.record_map)?;
    let output = render_output(args, &config, &record_map)?;
    write_output("render", &output, args.output.as_deref())
}

/// Render the page view described by `args` into the requested format.
fn render_output(
    args: &RenderArgs,
    config: &SiteConfig,
    record_map: &RecordMap,
) -> Result<String> {
    let mut request = PageViewRequest::new(config, record_map)
        .with_fallback(args.fallback)
        .with_search_params(&args.query);
    if let Some(page_id) = args.page_id.as_deref() {
        request = request.with_page_id(page_id);
    }
    if let Some(error) = args.error.as_deref() {
        request = request.with_error(error);
    }

    let hook = LogInspectHook;
    let view = render_page(&request, Some(&hook as &dyn InspectHook));
    debug!("render"; "page {} -> {}", request.requested_id(), view.state());

    match args.format {
        RenderFormat::Json => to_json(&view, args.pretty),
        RenderFormat::Html => Ok(render_view_head(&view)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Cli, Commands};
    use crate::config::test_parse_config;
    use clap::Parser;

    const ROOT: &str = "9ad8a41d862c436383037f318dfe2a7a";

    fn args(extra: &[&str]) -> RenderArgs {
        let argv = ["notion-press", "render", "page.json"].into_iter().chain(extra.iter().copied());
        match Cli::parse_from(argv).command {
            Commands::Render { args } => args,
            _ => unreachable!(),
        }
    }

    fn record_map() -> RecordMap {
        RecordMap::from_json(&format!(
            r#"{{"block": {{"{ROOT}": {{"role": "reader", "value": {{"id": "{ROOT}", "type": "page", "properties": {{"title": [["Home"]]}}}}}}}}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_json_output() {
        let config = test_parse_config(&format!("[site.notion]\nroot_page_id = \"{ROOT}\""));
        let out = render_output(&args(&[]), &config, &record_map()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["state"], "rendered");
        assert_eq!(json["is_index_page"], true);
        assert_eq!(json["metadata"]["canonical_url"], "https://example.org/");
    }

    #[test]
    fn test_html_output() {
        let config = test_parse_config(&format!("[site.notion]\nroot_page_id = \"{ROOT}\""));
        let out = render_output(&args(&["--format", "html"]), &config, &record_map()).unwrap();
        assert!(out.contains("<title>Home</title>"));
    }

    #[test]
    fn test_error_renders_not_found() {
        let config = test_parse_config("");
        let out = render_output(&args(&["--error", "timeout"]), &config, &record_map()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["state"], "not_found");
        assert_eq!(json["error"], "timeout");
    }

    #[test]
    fn test_fallback_html_is_empty() {
        let config = test_parse_config("");
        let out = render_output(&args(&["--fallback", "-f", "html"]), &config, &record_map()).unwrap();
        assert!(out.is_empty());
    }
}
