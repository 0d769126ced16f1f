//! SQL schema for the journal SQLite store.
//!
//! Executed at every connection startup; idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL.
///
/// `AUTOINCREMENT` keeps ids monotonically increasing for the lifetime of
/// each table — a deleted entry's id is never handed out again.
/// `ON DELETE CASCADE` on `tags` and `keywords` makes entry deletion remove
/// every dependent row without the caller's involvement.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS entries (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    content    TEXT NOT NULL,
    created_at TEXT NOT NULL    -- ISO 8601 UTC
);

-- Sentence-level annotations. sentence_index is positional within the
-- entry's content; it is not bounds-checked against the sentence count.
CREATE TABLE IF NOT EXISTS tags (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    entry_id       INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
    sentence_index INTEGER NOT NULL,
    tag            TEXT NOT NULL
);

-- Entry-level annotations, replaced wholesale by keyword updates.
CREATE TABLE IF NOT EXISTS keywords (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    entry_id INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
    keyword  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS tags_entry_idx     ON tags(entry_id);
CREATE INDEX IF NOT EXISTS keywords_entry_idx ON keywords(entry_id);

PRAGMA user_version = 1;
";
