//! Title and description extraction from blocks.

use crate::config::SiteConfig;
use crate::notion::{Block, BlockRole, BlockType, RecordMap, RichText};

/// Appended to descriptions cut at the length limit.
const ELLIPSIS: char = '…';

/// Plain-text title of a block.
///
/// Collection views are titled by their collection's name, falling back to
/// the block's own title when the name is blank. Returns `None` when the
/// title is missing or blank.
pub fn block_title(block: &Block, record_map: &RecordMap) -> Option<String> {
    let rich_text = match block.kind {
        BlockType::CollectionView | BlockType::CollectionViewPage => block
            .collection_id
            .as_deref()
            .and_then(|id| record_map.collection(id))
            .and_then(|collection| collection.name.as_ref())
            .filter(|name| !name.is_blank())
            .or_else(|| block.title()),
        _ => block.title(),
    }?;

    let title = rich_text.plain_text();
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Display title of a page: the block title, else the site name.
pub fn page_title(block: &Block, record_map: &RecordMap, site: &SiteConfig) -> String {
    block_title(block, record_map).unwrap_or_else(|| site.site.info.name.clone())
}

/// Description built from the leading paragraphs of a page.
///
/// Scans the direct children in document order: text blocks contribute their
/// plain text (blank ones are skipped) and the first block of any other kind
/// ends the scan. Nested pages are never entered. The result holds at most
/// `limit` characters, including the trailing ellipsis when cut.
pub fn page_description(block: &Block, record_map: &RecordMap, limit: usize) -> Option<String> {
    let mut description = String::new();

    for child in record_map.children(block) {
        if child.kind.role() != BlockRole::Text {
            break;
        }
        let Some(text) = child.title().filter(|t| !t.is_blank()).map(RichText::plain_text) else {
            continue;
        };
        let text = text.trim();

        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(text);

        if description.chars().count() > limit {
            break;
        }
    }

    let description = truncate(&description, limit);
    (!description.is_empty()).then_some(description)
}

/// Cut `text` to at most `limit` characters, ending with an ellipsis when cut.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.truncate(cut.trim_end().len());
    cut.push(ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::notion::{BlockProperties, Collection, Record};

    fn block(id: &str, kind: BlockType, title: Option<&[&str]>) -> Block {
        Block {
            id: id.into(),
            kind,
            properties: BlockProperties {
                title: title.map(|runs| runs.iter().copied().collect()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn page_with(children: Vec<Block>) -> (Block, RecordMap) {
        let mut root = block("root", BlockType::Page, Some(&["Root"]));
        root.content = children.iter().map(|b| b.id.clone()).collect();
        let map = RecordMap::from_blocks(std::iter::once(root.clone()).chain(children));
        (root, map)
    }

    mod title {
        use super::*;

        #[test]
        fn concatenates_runs() {
            let b = block("a", BlockType::Page, Some(&["Hello, ", "World"]));
            assert_eq!(block_title(&b, &RecordMap::default()).as_deref(), Some("Hello, World"));
        }

        #[test]
        fn empty_falls_back_to_site_name() {
            let site = test_parse_config("");
            let map = RecordMap::default();

            let b = block("a", BlockType::Page, Some(&[]));
            assert_eq!(page_title(&b, &map, &site), "Test");

            let b = block("a", BlockType::Page, Some(&["  "]));
            assert_eq!(page_title(&b, &map, &site), "Test");

            let b = block("a", BlockType::Page, None);
            assert_eq!(page_title(&b, &map, &site), "Test");
        }

        #[test]
        fn collection_view_uses_collection_name() {
            let mut b = block("a", BlockType::CollectionViewPage, None);
            b.collection_id = Some("c1".into());
            let mut map = RecordMap::from_blocks([b.clone()]);
            map.collection.insert(
                "c1",
                Record::new(Collection {
                    id: "c1".into(),
                    name: Some(RichText::from_iter(["Posts"])),
                }),
            );
            assert_eq!(block_title(&b, &map).as_deref(), Some("Posts"));
        }

        #[test]
        fn blank_collection_name_uses_block_title() {
            let mut b = block("a", BlockType::CollectionViewPage, Some(&["Archive"]));
            b.collection_id = Some("c1".into());
            let mut map = RecordMap::from_blocks([b.clone()]);
            map.collection.insert(
                "c1",
                Record::new(Collection {
                    id: "c1".into(),
                    name: Some(RichText::from_iter([" "])),
                }),
            );
            assert_eq!(block_title(&b, &map).as_deref(), Some("Archive"));
        }

        #[test]
        fn collection_view_without_collection() {
            let mut b = block("a", BlockType::CollectionViewPage, Some(&["Archive"]));
            b.collection_id = Some("missing".into());
            assert_eq!(block_title(&b, &RecordMap::default()).as_deref(), Some("Archive"));
        }
    }

    mod description {
        use super::*;

        #[test]
        fn joins_leading_text_blocks() {
            let (root, map) = page_with(vec![
                block("t1", BlockType::Text, Some(&["First."])),
                block("t2", BlockType::Text, Some(&["Second."])),
            ]);
            assert_eq!(
                page_description(&root, &map, 300).as_deref(),
                Some("First. Second.")
            );
        }

        #[test]
        fn stops_at_first_non_text_block() {
            let (root, map) = page_with(vec![
                block("t1", BlockType::Text, Some(&["Intro"])),
                block("h1", BlockType::Header, Some(&["Section"])),
                block("t2", BlockType::Text, Some(&["Later"])),
            ]);
            assert_eq!(page_description(&root, &map, 300).as_deref(), Some("Intro"));
        }

        #[test]
        fn skips_empty_text_blocks() {
            let (root, map) = page_with(vec![
                block("t1", BlockType::Text, None),
                block("t2", BlockType::Text, Some(&["   "])),
                block("t3", BlockType::Text, Some(&["Body"])),
            ]);
            assert_eq!(page_description(&root, &map, 300).as_deref(), Some("Body"));
        }

        #[test]
        fn only_non_text_children() {
            let (root, map) = page_with(vec![
                block("i1", BlockType::Image, None),
                block("t1", BlockType::Text, Some(&["Hidden"])),
            ]);
            assert_eq!(page_description(&root, &map, 300), None);
        }

        #[test]
        fn no_children() {
            let (root, map) = page_with(vec![]);
            assert_eq!(page_description(&root, &map, 300), None);
        }

        #[test]
        fn does_not_enter_sub_pages() {
            let mut sub = block("p1", BlockType::Page, Some(&["Sub page"]));
            sub.content = vec!["t1".into()];
            let (root, mut map) = page_with(vec![sub]);
            let text = block("t1", BlockType::Text, Some(&["Nested"]));
            map.block.insert("t1", Record::new(text));
            assert_eq!(page_description(&root, &map, 300), None);
        }

        #[test]
        fn truncated_within_limit() {
            let run = "a".repeat(20);
            let (root, map) = page_with(vec![
                block("t1", BlockType::Text, Some(&[run.as_str()])),
                block("t2", BlockType::Text, Some(&[run.as_str()])),
                block("t3", BlockType::Text, Some(&[run.as_str()])),
            ]);
            let description = page_description(&root, &map, 50).unwrap();
            assert_eq!(description.chars().count(), 50);
            assert!(description.ends_with(ELLIPSIS));
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("hello world", 7), "hello…");
        assert_eq!(truncate("äöü äöü", 4), "äöü…");
        assert_eq!(truncate("abc", 0), "");
    }
}
