//! Notion rich text (`properties.title` and friends).
//!
//! A rich text value is a list of decorations, each a JSON array whose first
//! element is the text run and whose optional second element lists formats:
//!
//! ```json
//! [["Hello, "], ["World", [["b"]]], ["‣", [["p", "067dd719-..."]]]]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single styled text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Decoration {
    pub text: String,
    /// Raw format list (`[["b"], ["a", "https://..."]]`), kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Value>,
}

impl Decoration {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formats: None,
        }
    }
}

impl<'de> Deserialize<'de> for Decoration {
    /// Tolerant decoding: a bare string is a plain run, a non-string head
    /// is an empty run. Malformed content never fails the whole record map.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(text) => Self::plain(text),
            Value::Array(mut parts) => {
                let formats = (parts.len() > 1).then(|| parts.swap_remove(1));
                let text = match parts.into_iter().next() {
                    Some(Value::String(s)) => s,
                    _ => String::new(),
                };
                Self { text, formats }
            }
            _ => Self::default(),
        })
    }
}

/// Ordered sequence of decorations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<Decoration>);

impl RichText {
    /// Concatenate the plain text of every run.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(|d| d.text.as_str()).collect()
    }

    /// True when there is no visible text.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|d| d.text.trim().is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for RichText {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Decoration::plain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text_concatenates_runs() {
        let text: RichText = serde_json::from_value(json!([["Hello, "], ["World", [["b"]]]])).unwrap();
        assert_eq!(text.plain_text(), "Hello, World");
    }

    #[test]
    fn test_formats_are_kept() {
        let text: RichText = serde_json::from_value(json!([["link", [["a", "https://x.dev"]]]])).unwrap();
        assert_eq!(text.0[0].formats, Some(json!([["a", "https://x.dev"]])));
    }

    #[test]
    fn test_tolerates_malformed_runs() {
        let text: RichText = serde_json::from_value(json!([[42], "bare", [], null])).unwrap();
        assert_eq!(text.plain_text(), "bare");
        assert_eq!(text.0.len(), 4);
    }

    #[test]
    fn test_blank() {
        assert!(RichText::default().is_blank());
        assert!(["  ", ""].into_iter().collect::<RichText>().is_blank());
        assert!(!["x"].into_iter().collect::<RichText>().is_blank());
    }
}
