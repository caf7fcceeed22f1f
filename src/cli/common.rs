//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::log;
use crate::notion::RecordMap;

/// Read a record map from a JSON file, or from stdin when `path` is `-`.
pub fn read_record_map(path: &Path) -> Result<RecordMap> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read record map from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read record map {}", path.display()))?
    };

    RecordMap::from_json(&json)
        .with_context(|| format!("Invalid record map JSON in {}", path.display()))
}

/// Serialize `value` as JSON, compact or pretty.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Write command output to a file, or to stdout.
pub fn write_output(module: &str, content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writeln!(file, "{}", content.trim_end())?;
            log!(module; "wrote output to {}", path.display());
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}
