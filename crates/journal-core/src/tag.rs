//! Tag — a label attached to one sentence within one entry.

use serde::{Deserialize, Serialize};

/// A stored sentence-level tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
  pub id:             i64,
  pub entry_id:       i64,
  /// Which sentence of the entry's content the tag annotates. Not checked
  /// against the actual sentence count.
  pub sentence_index: u32,
  pub tag:            String,
}

/// Input for creating a tag.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTag {
  pub entry_id:       i64,
  pub sentence_index: u32,
  pub tag:            String,
}
