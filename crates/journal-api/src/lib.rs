//! JSON REST API for the journal store.
//!
//! Exposes an axum [`Router`] backed by any
//! [`journal_core::store::JournalStore`]. CORS, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", journal_api::api_router(store.clone()))
//! ```

pub mod entries;
pub mod error;
pub mod keywords;
pub mod tags;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, put},
};
use journal_core::store::JournalStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: JournalStore + 'static,
{
  Router::new()
    // Entries
    .route("/diary", get(entries::list::<S>).post(entries::create::<S>))
    .route(
      "/diary/{id}",
      get(entries::get_one::<S>)
        .put(entries::update_content::<S>)
        .delete(entries::delete_one::<S>),
    )
    .route("/diary/{id}/keywords", put(entries::replace_keywords::<S>))
    // Tags — GET takes an entry id, DELETE a tag id.
    .route("/tags", get(tags::list_all::<S>).post(tags::create::<S>))
    .route(
      "/tags/{id}",
      get(tags::list_for_entry::<S>).delete(tags::delete_one::<S>),
    )
    // Keywords
    .route("/keywords", get(keywords::list::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
