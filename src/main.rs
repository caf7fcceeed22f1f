//! notion-press - resolve Notion pages into site URLs and social metadata.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use notion_press::cli::{self, Cli, Commands};
use notion_press::config::{SiteConfig, init_config};
use notion_press::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args),
        Commands::Links { args } => cli::links::run_links(args),
        Commands::Check => cli::check::run_check(),
    }
}
