//! Handlers for `/diary` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/diary` | All entries, newest first, with keywords |
//! | `POST`   | `/diary` | Body: `{"content":"...", "created_at":?, "keywords":?}` |
//! | `GET`    | `/diary/:id` | 404 if not found |
//! | `PUT`    | `/diary/:id` | Body: `{"content":"..."}` |
//! | `PUT`    | `/diary/:id/keywords` | Body: `{"keywords":[...]}`; replaces the full set |
//! | `DELETE` | `/diary/:id` | Cascades to tags and keywords |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use journal_core::{
  entry::{Entry, NewEntry},
  store::JournalStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /diary`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Entry>>, ApiError>
where
  S: JournalStore,
{
  let entries = store.list_entries().await?;
  Ok(Json(entries))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /diary` — the body deserialises straight into [`NewEntry`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewEntry>,
) -> Result<Json<Value>, ApiError>
where
  S: JournalStore,
{
  let entry = store.create_entry(body).await?;
  Ok(Json(json!({
    "message": "Diary entry created.",
    "entry_id": entry.id,
  })))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /diary/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Entry>, ApiError>
where
  S: JournalStore,
{
  let entry = store
    .get_entry(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("entry {id} not found")))?;
  Ok(Json(entry))
}

// ─── Update content ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
  pub content: String,
}

/// `PUT /diary/:id`
pub async fn update_content<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<UpdateBody>,
) -> Result<Json<Value>, ApiError>
where
  S: JournalStore,
{
  store.update_entry_content(id, body.content).await?;
  Ok(Json(json!({ "message": "Diary entry updated." })))
}

// ─── Replace keywords ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsBody {
  pub keywords: Vec<String>,
}

/// `PUT /diary/:id/keywords` — replaces the entry's full keyword set.
pub async fn replace_keywords<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<KeywordsBody>,
) -> Result<Json<Value>, ApiError>
where
  S: JournalStore,
{
  store.replace_entry_keywords(id, body.keywords).await?;
  Ok(Json(json!({ "message": "Keywords updated." })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /diary/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: JournalStore,
{
  store.delete_entry(id).await?;
  Ok(Json(json!({ "message": "Diary entry deleted." })))
}
