//! Entry — a diary record with text content and a creation timestamp.
//!
//! Entries own their annotations: deleting an entry removes every tag and
//! keyword attached to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored diary entry, including its full keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
  pub id:         i64,
  pub content:    String,
  pub created_at: DateTime<Utc>,
  /// Entry-level keywords, in insertion order.
  pub keywords:   Vec<String>,
}

/// Input for creating an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
  pub content:    String,
  /// Creation timestamp; the store assigns the current time when omitted.
  pub created_at: Option<DateTime<Utc>>,
  /// Initial keywords, inserted in the same transaction as the entry.
  #[serde(default)]
  pub keywords:   Vec<String>,
}

impl NewEntry {
  pub fn new(content: impl Into<String>) -> Self {
    Self {
      content:    content.into(),
      created_at: None,
      keywords:   Vec::new(),
    }
  }
}
