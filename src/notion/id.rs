//! Notion page/block identifiers.
//!
//! Notion exposes the same id in two spellings:
//!
//! - UUID form: `067dd719-a912-471e-a9a3-ac10710e7fdf`
//! - compact form: `067dd719a912471ea9a3ac10710e7fdf`
//!
//! [`NotionId`] always stores the compact, lowercase form so that ids coming
//! from URLs, config files and record map keys compare equal.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Compact id at the end of the input (`.../my-page-067dd719a912...`).
static COMPACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([a-f0-9]{32})$").expect("valid regex"));

/// Hyphenated UUID at the end of the input.
static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12})$")
        .expect("valid regex")
});

/// Canonical Notion id (32 lowercase hex digits, no hyphens).
///
/// Invariants:
/// - Always exactly 32 ASCII hex digits
/// - Always lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NotionId(String);

impl NotionId {
    /// Parse an id from a raw string.
    ///
    /// Accepts compact ids, UUIDs, and slugs/URLs that end with either
    /// (`my-post-067dd719a912471ea9a3ac10710e7fdf`). A query string is ignored.
    /// Returns `None` when no id can be found.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.split(['?', '#']).next().unwrap_or(raw).trim();
        let lower = raw.to_ascii_lowercase();

        if let Some(m) = COMPACT_RE.captures(&lower).and_then(|c| c.get(1)) {
            return Some(Self(m.as_str().to_string()));
        }

        UUID_RE
            .captures(&lower)
            .and_then(|c| c.get(1))
            .map(|m| Self(m.as_str().replace('-', "")))
    }

    /// Compact form (`067dd719a912471ea9a3ac10710e7fdf`).
    #[inline]
    pub fn as_compact(&self) -> &str {
        &self.0
    }

    /// Hyphenated UUID form (`067dd719-a912-471e-a9a3-ac10710e7fdf`).
    pub fn to_uuid(&self) -> String {
        let s = &self.0;
        format!(
            "{}-{}-{}-{}-{}",
            &s[0..8],
            &s[8..12],
            &s[12..16],
            &s[16..20],
            &s[20..32]
        )
    }

    /// Check whether a raw string refers to this id.
    pub fn matches(&self, raw: &str) -> bool {
        Self::parse(raw).is_some_and(|other| other == *self)
    }
}

impl fmt::Display for NotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NotionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NotionId {
    type Err = InvalidNotionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidNotionId(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for NotionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned when a string contains no Notion id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid notion id")]
pub struct InvalidNotionId(pub String);

/// Key used to index a block in a record map.
///
/// Valid ids are indexed by their compact form; anything else is kept raw so
/// that malformed record maps still resolve by exact key.
pub(crate) fn index_key(raw: &str) -> String {
    match NotionId::parse(raw) {
        Some(id) => id.0,
        None => raw.to_string(),
    }
}
