//! Block records from a Notion record map.
//!
//! Only the fields the metadata pipeline reads are typed; everything else in
//! the JSON payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

use super::RichText;

/// Deserialize a field, treating `null` as `Default::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Block type tag (`"type"` in the record map).
///
/// Unknown types deserialize to [`BlockType::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Page,
    CollectionViewPage,
    CollectionView,
    Text,
    Header,
    SubHeader,
    SubSubHeader,
    Image,
    #[default]
    #[serde(other)]
    Other,
}

/// What the metadata pipeline may do with a block of a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    /// A page of its own: has a URL, a title, maybe a cover.
    Page,
    /// A paragraph whose plain text may feed the description.
    Text,
    /// Anything else: never inspected, never traversed.
    Opaque,
}

impl BlockType {
    /// Role dispatch table.
    pub const fn role(self) -> BlockRole {
        match self {
            Self::Page | Self::CollectionViewPage => BlockRole::Page,
            Self::Text => BlockRole::Text,
            Self::CollectionView
            | Self::Header
            | Self::SubHeader
            | Self::SubSubHeader
            | Self::Image
            | Self::Other => BlockRole::Opaque,
        }
    }

    #[inline]
    pub const fn is_page(self) -> bool {
        matches!(self.role(), BlockRole::Page)
    }

    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self.role(), BlockRole::Text)
    }
}

/// `properties` of a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,
    /// Original source URL of image/file blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RichText>,
}

/// `format` of a block: free-form display hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_cover_position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_icon: Option<String>,
    /// Display URL of image blocks (preferred over `properties.source`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_source: Option<String>,
}

/// A content block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: BlockType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: BlockProperties,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: BlockFormat,
    /// Child block ids in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Table of the parent (`block`, `space`, `collection`).
    #[serde(default)]
    pub parent_table: Option<String>,
    #[serde(default)]
    pub space_id: Option<String>,
    /// Backing collection of collection views.
    #[serde(default)]
    pub collection_id: Option<String>,
}

impl Block {
    /// Title rich text, if any.
    #[inline]
    pub fn title(&self) -> Option<&RichText> {
        self.properties.title.as_ref()
    }

    /// Page cover from `format.page_cover`, ignoring blank values.
    pub fn page_cover(&self) -> Option<&str> {
        self.format
            .page_cover
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Source URL of an image block.
    pub fn image_source(&self) -> Option<String> {
        if let Some(display) = self.format.display_source.as_deref()
            && !display.trim().is_empty()
        {
            return Some(display.trim().to_string());
        }
        self.properties
            .source
            .as_ref()
            .map(RichText::plain_text)
            .filter(|s| !s.trim().is_empty())
    }

    /// Parent table name as used by Notion's image proxy (`table=` param).
    ///
    /// Blocks living directly under a space or a collection are addressed
    /// through the `block` table.
    pub fn image_table(&self) -> &str {
        match self.parent_table.as_deref() {
            None | Some("space") | Some("collection") => "block",
            Some(table) => table,
        }
    }
}
