//! Record map: the block graph snapshot for one page view.
//!
//! ```json
//! {
//!   "block": {
//!     "067dd719-a912-471e-a9a3-ac10710e7fdf": { "role": "reader", "value": { ... } }
//!   },
//!   "collection": { ... }
//! }
//! ```
//!
//! Tables keep their insertion order and index entries by canonical id, so
//! lookups work with either id spelling.

use std::fmt;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::id::index_key;
use super::{Block, RichText};
use crate::debug;

/// A `{ "role": ..., "value": ... }` entry.
///
/// `value` is `None` when the caller lacks access to the record or the
/// payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub value: Option<T>,
}

impl<T> Record<T> {
    pub fn new(value: T) -> Self {
        Self {
            role: Some("reader".into()),
            value: Some(value),
        }
    }

    /// An entry with no payload.
    pub fn empty() -> Self {
        Self {
            role: None,
            value: None,
        }
    }
}

/// Insertion-ordered table of records keyed by id.
#[derive(Debug, Clone)]
pub struct RecordTable<T> {
    entries: Vec<(String, Record<T>)>,
    /// Canonical id -> position in `entries` (first occurrence wins).
    index: FxHashMap<String, usize>,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T> RecordTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Used while materializing a table; an id that is
    /// already present keeps resolving to its first entry.
    pub fn insert(&mut self, key: impl Into<String>, record: Record<T>) {
        let key = key.into();
        let position = self.entries.len();
        self.index.entry(index_key(&key)).or_insert(position);
        self.entries.push((key, record));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by id (either spelling).
    pub fn get(&self, id: &str) -> Option<&Record<T>> {
        self.index
            .get(&index_key(id))
            .map(|&position| &self.entries[position].1)
    }

    /// Look up a record's value by id.
    pub fn value(&self, id: &str) -> Option<&T> {
        self.get(id).and_then(|record| record.value.as_ref())
    }

    /// First inserted entry.
    pub fn first(&self) -> Option<(&str, &Record<T>)> {
        self.entries.first().map(|(key, record)| (key.as_str(), record))
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record<T>)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Present values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|(_, record)| record.value.as_ref())
    }
}

impl<T> FromIterator<(String, Record<T>)> for RecordTable<T> {
    fn from_iter<I: IntoIterator<Item = (String, Record<T>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, record) in iter {
            table.insert(key, record);
        }
        table
    }
}

impl<T: Serialize> Serialize for RecordTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for RecordTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

struct TableVisitor<T>(PhantomData<T>);

impl<'de, T: DeserializeOwned> Visitor<'de> for TableVisitor<T> {
    type Value = RecordTable<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of record ids to records")
    }

    /// Entries whose payload does not decode are kept with `value: None`,
    /// so one malformed block degrades to "missing" instead of failing
    /// the whole record map.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = RecordTable::new();
        while let Some((key, raw)) = access.next_entry::<String, Value>()? {
            let record = match serde_json::from_value::<Record<T>>(raw) {
                Ok(record) => record,
                Err(e) => {
                    debug!("record"; "undecodable record {}: {}", key, e);
                    Record::empty()
                }
            };
            table.insert(key, record);
        }
        Ok(table)
    }
}

/// A Notion collection (database).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(default)]
    pub name: Option<RichText>,
}

/// Snapshot of the content graph for one page view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMap {
    pub block: RecordTable<Block>,
    pub collection: RecordTable<Collection>,
}

impl RecordMap {
    /// Build a record map from blocks, in order. The first block is the root.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let block = blocks
            .into_iter()
            .map(|b| (b.id.clone(), Record::new(b)))
            .collect();
        Self {
            block,
            collection: RecordTable::new(),
        }
    }

    /// Parse a record map from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// True when the block table has no entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    /// Look up a block by id (either spelling).
    #[inline]
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.block.value(id)
    }

    /// Look up a collection by id.
    #[inline]
    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collection.value(id)
    }

    /// Direct children of a block that are present in the map, in order.
    pub fn children<'a>(&'a self, block: &'a Block) -> impl Iterator<Item = &'a Block> + 'a {
        block.content.iter().filter_map(|id| self.block(id))
    }

    /// Resolve the root block for a requested page.
    ///
    /// The requested id is looked up first. When the map does not contain
    /// it (callers fetch exactly one page, possibly under another spelling
    /// or a slug), the first inserted block is the root. An entry without
    /// a value resolves to `None`.
    pub fn resolve_root(&self, page_id: &str) -> Option<&Block> {
        if let Some(record) = self.block.get(page_id) {
            return record.value.as_ref();
        }

        let (key, record) = self.block.first()?;
        debug!("record"; "page {} not keyed in record map, using first block {}", page_id, key);
        record.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::BlockType;
    use serde_json::json;

    const ROOT: &str = "9ad8a41d-862c-4363-8303-7f318dfe2a7a";
    const CHILD: &str = "067dd719-a912-471e-a9a3-ac10710e7fdf";

    fn sample() -> RecordMap {
        serde_json::from_value(json!({
            "block": {
                ROOT: {"role": "reader", "value": {"id": ROOT, "type": "page", "content": [CHILD]}},
                CHILD: {"role": "reader", "value": {"id": CHILD, "type": "text", "properties": {"title": [["hi"]]}}}
            }
        }))
        .unwrap()
    }

    mod table {
        use super::*;

        #[test]
        fn preserves_insertion_order() {
            let map = sample();
            let keys: Vec<_> = map.block.iter().map(|(k, _)| k).collect();
            assert_eq!(keys, vec![ROOT, CHILD]);
        }

        #[test]
        fn lookup_accepts_both_spellings() {
            let map = sample();
            assert!(map.block(CHILD).is_some());
            assert!(map.block(&CHILD.replace('-', "")).is_some());
            assert!(map.block("ffffffffffffffffffffffffffffffff").is_none());
        }

        #[test]
        fn duplicate_keys_keep_first() {
            let mut table = RecordTable::new();
            table.insert(CHILD, Record::new(Block { id: "first".into(), ..Default::default() }));
            table.insert(CHILD.replace('-', ""), Record::new(Block { id: "second".into(), ..Default::default() }));
            assert_eq!(table.len(), 2);
            assert_eq!(table.value(CHILD).unwrap().id, "first");
        }

        #[test]
        fn malformed_entry_becomes_empty_record() {
            let map: RecordMap = serde_json::from_value(json!({
                "block": { CHILD: {"role": "reader", "value": {"id": 42}} }
            }))
            .unwrap();
            assert_eq!(map.block.len(), 1);
            assert!(map.block(CHILD).is_none());
        }

        #[test]
        fn missing_value_decodes_as_empty() {
            let table: RecordTable<Collection> =
                serde_json::from_value(json!({ CHILD: {"role": "none"} })).unwrap();
            let record = table.get(CHILD).unwrap();
            assert_eq!(record.role.as_deref(), Some("none"));
            assert!(record.value.is_none());
        }

        #[test]
        fn serializes_in_order() {
            let map = sample();
            let json = serde_json::to_string(&map.block).unwrap();
            assert!(json.find(ROOT).unwrap() < json.find(CHILD).unwrap());
        }
    }

    mod resolve_root {
        use super::*;

        #[test]
        fn by_requested_id() {
            let map = sample();
            assert_eq!(map.resolve_root(CHILD).unwrap().kind, BlockType::Text);
        }

        #[test]
        fn falls_back_to_first_key() {
            let map = sample();
            assert_eq!(map.resolve_root("some-slug").unwrap().id, ROOT);
        }

        #[test]
        fn single_block_map() {
            let map = RecordMap::from_blocks([Block {
                id: ROOT.into(),
                kind: BlockType::Page,
                ..Default::default()
            }]);
            assert_eq!(map.resolve_root(CHILD).unwrap().id, ROOT);
        }

        #[test]
        fn empty_map() {
            assert!(RecordMap::default().resolve_root(ROOT).is_none());
        }

        #[test]
        fn entry_without_value() {
            let map: RecordMap =
                serde_json::from_value(json!({"block": { ROOT: {"role": "none"} }})).unwrap();
            assert!(!map.is_empty());
            assert!(map.resolve_root(ROOT).is_none());
            assert!(map.resolve_root("other").is_none());
        }
    }

    #[test]
    fn test_children_skip_missing() {
        let root = Block {
            id: ROOT.into(),
            kind: BlockType::Page,
            content: vec![CHILD.into(), "missing".into()],
            ..Default::default()
        };
        let child = Block {
            id: CHILD.into(),
            kind: BlockType::Text,
            ..Default::default()
        };
        let map = RecordMap::from_blocks([root.clone(), child]);
        let children: Vec<_> = map.children(&root).map(|b| b.id.as_str()).collect();
        assert_eq!(children, vec![CHILD]);
    }

    #[test]
    fn test_from_json() {
        let map = RecordMap::from_json(r#"{"block": {}}"#).unwrap();
        assert!(map.is_empty());
        assert!(RecordMap::from_json("not json").is_err());
    }
}
