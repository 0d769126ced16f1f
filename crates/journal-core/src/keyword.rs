//! Keyword — a free-text label on an entry as a whole.
//!
//! Keywords are always managed in the context of their owning entry:
//! created in bulk at entry creation, or replaced wholesale. This type is
//! the system-wide listing view; per-entry keywords travel as plain
//! strings on [`Entry`](crate::entry::Entry).

use serde::{Deserialize, Serialize};

/// A stored keyword row, annotated with its owning entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
  pub id:       i64,
  pub entry_id: i64,
  pub keyword:  String,
}
