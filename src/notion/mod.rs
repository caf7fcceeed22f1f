//! Notion content model.
//!
//! | Module       | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `id`         | Canonical page/block ids                       |
//! | `rich_text`  | Styled text runs and plain-text flattening     |
//! | `block`      | Block records and the block-type role table    |
//! | `record_map` | Ordered record tables and root resolution      |

mod block;
mod id;
mod record_map;
mod rich_text;

pub use block::{Block, BlockFormat, BlockProperties, BlockRole, BlockType};
pub use id::{InvalidNotionId, NotionId};
pub use record_map::{Collection, Record, RecordMap, RecordTable};
pub use rich_text::{Decoration, RichText};
