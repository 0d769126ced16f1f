//! Handler for the `/keywords` endpoint.
//!
//! Keyword creation and replacement live under `/diary` since keywords are
//! always managed in the context of their owning entry; this module only
//! exposes the system-wide listing.

use std::sync::Arc;

use axum::{Json, extract::State};
use journal_core::{keyword::Keyword, store::JournalStore};

use crate::error::ApiError;

/// `GET /keywords`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Keyword>>, ApiError>
where
  S: JournalStore,
{
  let keywords = store.list_keywords().await?;
  Ok(Json(keywords))
}
