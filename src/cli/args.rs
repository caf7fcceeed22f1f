//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::RuntimeMode;

/// Resolve Notion pages into site URLs and social metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: press.toml)
    #[arg(short = 'C', long, global = true, default_value = "press.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Development mode: canonical URLs are not emitted
    #[arg(short, long, global = true)]
    pub dev: bool,

    /// Report every resolved page view to the inspect hook
    #[arg(short, long, global = true)]
    pub inspect: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a page view and print its metadata
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Print the page URL and image URL mappings of a record map
    #[command(visible_alias = "l")]
    Links {
        #[command(flatten)]
        args: LinksArgs,
    },

    /// Validate the configuration and print the URL override table
    #[command(visible_alias = "c")]
    Check,
}

/// Output format of the render command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// JSON page view
    #[default]
    Json,
    /// `<head>` tags
    Html,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Record map JSON file (`-` reads stdin)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub record_map: PathBuf,

    /// Requested page id (default: the root page)
    #[arg(short, long)]
    pub page_id: Option<String>,

    /// Upstream fetch error; renders the not-found page
    #[arg(short, long)]
    pub error: Option<String>,

    /// Route is still loading (fallback render)
    #[arg(long)]
    pub fallback: bool,

    /// Query parameters carried by every page link (`key=value`)
    #[arg(short = 'q', long = "query", value_parser = parse_query_pair)]
    pub query: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Json)]
    pub format: RenderFormat,

    /// Pretty-print JSON output
    #[arg(short = 'P', long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Links command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LinksArgs {
    /// Record map JSON file (`-` reads stdin)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub record_map: PathBuf,

    /// Pretty-print JSON output
    #[arg(short = 'P', long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Parse a `key=value` query pair.
fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

impl Cli {
    /// Runtime flags selected on the command line.
    pub const fn runtime_mode(&self) -> RuntimeMode {
        let mode = if self.dev {
            RuntimeMode::DEVELOPMENT
        } else {
            RuntimeMode::PRODUCTION
        };
        if self.inspect { mode.inspecting() } else { mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "notion-press",
            "render",
            "page.json",
            "--page-id",
            "067dd719a912471ea9a3ac10710e7fdf",
            "-q",
            "ref=home",
            "--format",
            "html",
        ]);
        let Commands::Render { args } = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.record_map, PathBuf::from("page.json"));
        assert_eq!(args.query, vec![("ref".to_string(), "home".to_string())]);
        assert_eq!(args.format, RenderFormat::Html);
        assert_eq!(cli.config, PathBuf::from("press.toml"));
    }

    #[test]
    fn test_runtime_mode() {
        let cli = Cli::parse_from(["notion-press", "--dev", "check"]);
        assert_eq!(cli.runtime_mode(), RuntimeMode::DEVELOPMENT);

        let cli = Cli::parse_from(["notion-press", "check", "--inspect"]);
        assert!(!cli.runtime_mode().is_server());
        assert!(!cli.runtime_mode().is_dev());
    }

    #[test]
    fn test_parse_query_pair() {
        assert_eq!(parse_query_pair("a=b"), Ok(("a".into(), "b".into())));
        assert_eq!(parse_query_pair("a="), Ok(("a".into(), String::new())));
        assert!(parse_query_pair("=b").is_err());
        assert!(parse_query_pair("ab").is_err());
    }
}
