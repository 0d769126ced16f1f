//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings in UTC, which keeps
//! `ORDER BY created_at` lexicographic order equal to chronological order.

use chrono::{DateTime, Utc};
use journal_core::{Error, Result, entry::Entry};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Storage(format!("bad timestamp {s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `entries` row; the timestamp is parsed
/// outside the connection-thread closure.
pub struct RawEntry {
  pub id:         i64,
  pub content:    String,
  pub created_at: String,
}

impl RawEntry {
  pub fn into_entry(self, keywords: Vec<String>) -> Result<Entry> {
    Ok(Entry {
      id:         self.id,
      content:    self.content,
      created_at: decode_dt(&self.created_at)?,
      keywords,
    })
  }
}
