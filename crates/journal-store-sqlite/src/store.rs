//! [`SqliteStore`] — the SQLite implementation of [`JournalStore`].

use std::{collections::HashMap, path::Path};

use chrono::Utc;
use journal_core::{
  Error, Result,
  entry::{Entry, NewEntry},
  keyword::Keyword,
  store::JournalStore,
  tag::{NewTag, Tag},
};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{RawEntry, encode_dt},
  schema::SCHEMA,
};

fn db_err(e: tokio_rusqlite::Error) -> Error { Error::Storage(e.to_string()) }

fn trim_all(keywords: Vec<String>) -> Vec<String> {
  keywords.into_iter().map(|k| k.trim().to_string()).collect()
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A journal store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All
/// operations run on the connection's dedicated thread, one at a time, so
/// each transaction commits before the next operation starts.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(db_err)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(db_err)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(db_err)
  }
}

// ─── JournalStore impl ───────────────────────────────────────────────────────

impl JournalStore for SqliteStore {
  // ── Entries ───────────────────────────────────────────────────────────────

  async fn create_entry(&self, input: NewEntry) -> Result<Entry> {
    if input.content.is_empty() {
      return Err(Error::EmptyContent);
    }

    let content    = input.content;
    let created_at = input.created_at.unwrap_or_else(Utc::now);
    let keywords   = trim_all(input.keywords);

    let content_arg  = content.clone();
    let at_str       = encode_dt(created_at);
    let keywords_arg = keywords.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO entries (content, created_at) VALUES (?1, ?2)",
          rusqlite::params![content_arg, at_str],
        )?;
        let id = tx.last_insert_rowid();
        for kw in &keywords_arg {
          tx.execute(
            "INSERT INTO keywords (entry_id, keyword) VALUES (?1, ?2)",
            rusqlite::params![id, kw],
          )?;
        }
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(db_err)?;

    Ok(Entry { id, content, created_at, keywords })
  }

  async fn list_entries(&self) -> Result<Vec<Entry>> {
    let (raws, keyword_rows): (Vec<RawEntry>, Vec<(i64, String)>) = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, content, created_at FROM entries
           ORDER BY created_at DESC, id DESC",
        )?;
        let raws = stmt
          .query_map([], |row| {
            Ok(RawEntry {
              id:         row.get(0)?,
              content:    row.get(1)?,
              created_at: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt =
          conn.prepare("SELECT entry_id, keyword FROM keywords ORDER BY id")?;
        let keyword_rows = stmt
          .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((raws, keyword_rows))
      })
      .await
      .map_err(db_err)?;

    let mut by_entry: HashMap<i64, Vec<String>> = HashMap::new();
    for (entry_id, keyword) in keyword_rows {
      by_entry.entry(entry_id).or_default().push(keyword);
    }

    raws
      .into_iter()
      .map(|raw| {
        let keywords = by_entry.remove(&raw.id).unwrap_or_default();
        raw.into_entry(keywords)
      })
      .collect()
  }

  async fn get_entry(&self, id: i64) -> Result<Option<Entry>> {
    let found: Option<(RawEntry, Vec<String>)> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(
            "SELECT id, content, created_at FROM entries WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(RawEntry {
                id:         row.get(0)?,
                content:    row.get(1)?,
                created_at: row.get(2)?,
              })
            },
          )
          .optional()?;

        let Some(raw) = raw else { return Ok(None) };

        let mut stmt = conn
          .prepare("SELECT keyword FROM keywords WHERE entry_id = ?1 ORDER BY id")?;
        let keywords = stmt
          .query_map(rusqlite::params![id], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(Some((raw, keywords)))
      })
      .await
      .map_err(db_err)?;

    found
      .map(|(raw, keywords)| raw.into_entry(keywords))
      .transpose()
  }

  async fn update_entry_content(&self, id: i64, content: String) -> Result<()> {
    if content.is_empty() {
      return Err(Error::EmptyContent);
    }

    let rows: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE entries SET content = ?1 WHERE id = ?2",
          rusqlite::params![content, id],
        )?)
      })
      .await
      .map_err(db_err)?;

    if rows == 0 {
      return Err(Error::EntryNotFound(id));
    }
    Ok(())
  }

  async fn replace_entry_keywords(
    &self,
    id: i64,
    keywords: Vec<String>,
  ) -> Result<Vec<String>> {
    let keywords     = trim_all(keywords);
    let keywords_arg = keywords.clone();

    // The delete and all inserts commit together; a reader never sees a
    // mixed old/new set or a partially-inserted new one.
    let entry_exists: bool = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists: bool = tx
          .query_row(
            "SELECT 1 FROM entries WHERE id = ?1",
            rusqlite::params![id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !exists {
          return Ok(false);
        }

        tx.execute("DELETE FROM keywords WHERE entry_id = ?1", rusqlite::params![id])?;
        for kw in &keywords_arg {
          tx.execute(
            "INSERT INTO keywords (entry_id, keyword) VALUES (?1, ?2)",
            rusqlite::params![id, kw],
          )?;
        }
        tx.commit()?;
        Ok(true)
      })
      .await
      .map_err(db_err)?;

    if !entry_exists {
      return Err(Error::EntryNotFound(id));
    }
    Ok(keywords)
  }

  async fn delete_entry(&self, id: i64) -> Result<()> {
    let rows: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM entries WHERE id = ?1", rusqlite::params![id])?)
      })
      .await
      .map_err(db_err)?;

    if rows == 0 {
      return Err(Error::EntryNotFound(id));
    }
    Ok(())
  }

  // ── Tags ──────────────────────────────────────────────────────────────────

  async fn create_tag(&self, input: NewTag) -> Result<Tag> {
    let NewTag { entry_id, sentence_index, tag } = input;
    let tag_arg = tag.clone();

    // Explicit existence check so a dangling entry_id reports NotFound
    // instead of a bare foreign-key violation.
    let id: Option<i64> = self
      .conn
      .call(move |conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM entries WHERE id = ?1",
            rusqlite::params![entry_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !exists {
          return Ok(None);
        }

        conn.execute(
          "INSERT INTO tags (entry_id, sentence_index, tag) VALUES (?1, ?2, ?3)",
          rusqlite::params![entry_id, sentence_index, tag_arg],
        )?;
        Ok(Some(conn.last_insert_rowid()))
      })
      .await
      .map_err(db_err)?;

    match id {
      Some(id) => Ok(Tag { id, entry_id, sentence_index, tag }),
      None     => Err(Error::EntryNotFound(entry_id)),
    }
  }

  async fn list_tags(&self, entry_id: Option<i64>) -> Result<Vec<Tag>> {
    self
      .conn
      .call(move |conn| {
        let map_row = |row: &rusqlite::Row<'_>| {
          Ok(Tag {
            id:             row.get(0)?,
            entry_id:       row.get(1)?,
            sentence_index: row.get(2)?,
            tag:            row.get(3)?,
          })
        };

        let tags = if let Some(entry_id) = entry_id {
          let mut stmt = conn.prepare(
            "SELECT id, entry_id, sentence_index, tag FROM tags
             WHERE entry_id = ?1 ORDER BY id",
          )?;
          stmt
            .query_map(rusqlite::params![entry_id], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(
            "SELECT id, entry_id, sentence_index, tag FROM tags ORDER BY id",
          )?;
          stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(tags)
      })
      .await
      .map_err(db_err)
  }

  async fn delete_tag(&self, id: i64) -> Result<()> {
    let rows: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM tags WHERE id = ?1", rusqlite::params![id])?)
      })
      .await
      .map_err(db_err)?;

    if rows == 0 {
      return Err(Error::TagNotFound(id));
    }
    Ok(())
  }

  // ── Keywords ──────────────────────────────────────────────────────────────

  async fn list_keywords(&self) -> Result<Vec<Keyword>> {
    self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, entry_id, keyword FROM keywords ORDER BY id")?;
        let keywords = stmt
          .query_map([], |row| {
            Ok(Keyword {
              id:       row.get(0)?,
              entry_id: row.get(1)?,
              keyword:  row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(keywords)
      })
      .await
      .map_err(db_err)
  }
}
