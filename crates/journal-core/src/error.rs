//! Error types for `journal-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A create or update was given empty content.
  #[error("entry content must not be empty")]
  EmptyContent,

  #[error("entry not found: {0}")]
  EntryNotFound(i64),

  #[error("tag not found: {0}")]
  TagNotFound(i64),

  /// The backing store failed in a way the caller cannot recover from.
  #[error("storage failure: {0}")]
  Storage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
