//! The `JournalStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `journal-store-sqlite`). The HTTP layer (`journal-api`) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  entry::{Entry, NewEntry},
  keyword::Keyword,
  tag::{NewTag, Tag},
};

/// Abstraction over a journal store backend.
///
/// Every operation runs as a single storage transaction: it either commits
/// or fails, and no caller observes a partially-applied write from another.
/// Not-found conditions on ids surface as
/// [`Error::EntryNotFound`](crate::Error::EntryNotFound) /
/// [`Error::TagNotFound`](crate::Error::TagNotFound) uniformly across all
/// delete and update operations.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait JournalStore: Send + Sync {
  // ── Entries ───────────────────────────────────────────────────────────

  /// Create an entry, together with its initial keywords if any.
  ///
  /// Keywords are trimmed of surrounding whitespace and inserted in the
  /// same transaction as the entry, so both appear atomically to readers.
  /// Fails with [`Error::EmptyContent`](crate::Error::EmptyContent) if
  /// `content` is empty.
  fn create_entry(
    &self,
    input: NewEntry,
  ) -> impl Future<Output = Result<Entry>> + Send + '_;

  /// List all entries, most recent `created_at` first, each with its full
  /// keyword list.
  fn list_entries(&self) -> impl Future<Output = Result<Vec<Entry>>> + Send + '_;

  /// Retrieve an entry by id. Returns `None` if not found.
  fn get_entry(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Entry>>> + Send + '_;

  /// Replace an entry's content text.
  fn update_entry_content(
    &self,
    id: i64,
    content: String,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  /// Atomically discard all keywords for an entry and insert `keywords`
  /// (each trimmed of whitespace). An empty list clears all keywords.
  /// Returns the stored list.
  fn replace_entry_keywords(
    &self,
    id: i64,
    keywords: Vec<String>,
  ) -> impl Future<Output = Result<Vec<String>>> + Send + '_;

  /// Delete an entry and, via cascade, all its tags and keywords.
  fn delete_entry(&self, id: i64) -> impl Future<Output = Result<()>> + Send + '_;

  // ── Tags ──────────────────────────────────────────────────────────────

  /// Create a sentence-level tag. The referenced entry must exist.
  fn create_tag(
    &self,
    input: NewTag,
  ) -> impl Future<Output = Result<Tag>> + Send + '_;

  /// List tags for one entry, or system-wide when `entry_id` is `None`.
  fn list_tags(
    &self,
    entry_id: Option<i64>,
  ) -> impl Future<Output = Result<Vec<Tag>>> + Send + '_;

  /// Delete a single tag by id.
  fn delete_tag(&self, id: i64) -> impl Future<Output = Result<()>> + Send + '_;

  // ── Keywords ──────────────────────────────────────────────────────────

  /// List all keyword rows system-wide, each with its owning entry id.
  fn list_keywords(&self) -> impl Future<Output = Result<Vec<Keyword>>> + Send + '_;
}
