//! Handlers for `/tags` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/tags` | All tags system-wide, with owning `entry_id` |
//! | `POST`   | `/tags` | Body: `{"entry_id":1, "sentence_index":0, "tag":"..."}` |
//! | `GET`    | `/tags/:entry_id` | Tags for one entry, without `entry_id` |
//! | `DELETE` | `/tags/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use journal_core::{
  store::JournalStore,
  tag::{NewTag, Tag},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── List all ─────────────────────────────────────────────────────────────────

/// `GET /tags`
pub async fn list_all<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Tag>>, ApiError>
where
  S: JournalStore,
{
  let tags = store.list_tags(None).await?;
  Ok(Json(tags))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /tags` — the referenced entry must exist.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewTag>,
) -> Result<Json<Value>, ApiError>
where
  S: JournalStore,
{
  let tag = store.create_tag(body).await?;
  Ok(Json(json!({
    "message": "Tag created.",
    "tag_id": tag.id,
  })))
}

// ─── List for one entry ───────────────────────────────────────────────────────

/// A tag as returned by the per-entry listing; the owning entry is implied
/// by the request path.
#[derive(Debug, Serialize)]
pub struct EntryTag {
  pub id:             i64,
  pub sentence_index: u32,
  pub tag:            String,
}

impl From<Tag> for EntryTag {
  fn from(t: Tag) -> Self {
    Self {
      id:             t.id,
      sentence_index: t.sentence_index,
      tag:            t.tag,
    }
  }
}

/// `GET /tags/:entry_id`
pub async fn list_for_entry<S>(
  State(store): State<Arc<S>>,
  Path(entry_id): Path<i64>,
) -> Result<Json<Vec<EntryTag>>, ApiError>
where
  S: JournalStore,
{
  let tags = store.list_tags(Some(entry_id)).await?;
  Ok(Json(tags.into_iter().map(EntryTag::from).collect()))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /tags/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: JournalStore,
{
  store.delete_tag(id).await?;
  Ok(Json(json!({ "message": "Tag deleted." })))
}
