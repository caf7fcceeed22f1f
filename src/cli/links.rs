//! `links` command: page path and image URL report of a record map.

use anyhow::Result;

use crate::config::cfg;
use crate::log;
use crate::page::collect_links;
use crate::utils::plural::plural_count;

use super::args::LinksArgs;
use super::common::{read_record_map, to_json, write_output};

pub fn run_links(args: &LinksArgs) -> Result<()> {
    let config = cfg();
    let record_map = read_record_map(&args.record_map)?;
    let report = collect_links(&config, &record_map, &[]);

    log!(
        "links";
        "{}, {}",
        plural_count(report.pages.len(), "page"),
        plural_count(report.images.len(), "image")
    );
    for conflict in &report.conflicts {
        log!(
            "warning";
            "path {} is shared by {}: {}",
            conflict.path,
            plural_count(conflict.ids.len(), "page"),
            conflict.ids.join(", ")
        );
    }

    write_output("links", &to_json(&report, args.pretty)?, args.output.as_deref())
}
