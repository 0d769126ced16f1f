//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{Duration, Utc};
use journal_core::{
  Error,
  entry::NewEntry,
  store::JournalStore,
  tag::NewTag,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn entry_with_keywords(content: &str, keywords: &[&str]) -> NewEntry {
  NewEntry {
    content:    content.to_string(),
    created_at: None,
    keywords:   keywords.iter().map(|k| k.to_string()).collect(),
  }
}

fn tag(entry_id: i64, sentence_index: u32, label: &str) -> NewTag {
  NewTag {
    entry_id,
    sentence_index,
    tag: label.to_string(),
  }
}

// ─── Entry creation ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_entry() {
  let s = store().await;

  let created = s.create_entry(NewEntry::new("Dear diary")).await.unwrap();
  assert_eq!(created.content, "Dear diary");
  assert!(created.keywords.is_empty());

  let fetched = s.get_entry(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.content, "Dear diary");
  assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn create_entry_empty_content_errors() {
  let s = store().await;
  let err = s.create_entry(NewEntry::new("")).await.unwrap_err();
  assert!(matches!(err, Error::EmptyContent));
}

#[tokio::test]
async fn create_entry_trims_keywords() {
  let s = store().await;

  let created = s
    .create_entry(entry_with_keywords("today", &["a", "  b "]))
    .await
    .unwrap();
  assert_eq!(created.keywords, ["a", "b"]);

  let fetched = s.get_entry(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.keywords, ["a", "b"]);
}

#[tokio::test]
async fn create_entry_with_explicit_timestamp() {
  let s = store().await;
  let at = Utc::now() - Duration::days(3);

  let created = s
    .create_entry(NewEntry {
      content:    "backdated".to_string(),
      created_at: Some(at),
      keywords:   Vec::new(),
    })
    .await
    .unwrap();

  let fetched = s.get_entry(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.created_at, at);
}

#[tokio::test]
async fn get_entry_missing_returns_none() {
  let s = store().await;
  assert!(s.get_entry(999).await.unwrap().is_none());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_entries_newest_first() {
  let s = store().await;
  let base = Utc::now();

  for (offset_days, content) in [(2, "oldest"), (0, "newest"), (1, "middle")] {
    s.create_entry(NewEntry {
      content:    content.to_string(),
      created_at: Some(base - Duration::days(offset_days)),
      keywords:   Vec::new(),
    })
    .await
    .unwrap();
  }

  let entries = s.list_entries().await.unwrap();
  let contents: Vec<_> = entries.iter().map(|e| e.content.as_str()).collect();
  assert_eq!(contents, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn list_entries_carries_keyword_lists() {
  let s = store().await;

  let a = s
    .create_entry(entry_with_keywords("first", &["alpha", "beta"]))
    .await
    .unwrap();
  let b = s.create_entry(NewEntry::new("second")).await.unwrap();

  let entries = s.list_entries().await.unwrap();
  let find = |id| entries.iter().find(|e| e.id == id).unwrap();
  assert_eq!(find(a.id).keywords, ["alpha", "beta"]);
  assert!(find(b.id).keywords.is_empty());
}

// ─── Content update ──────────────────────────────────────────────────────────

#[tokio::test]
async fn update_entry_content_replaces_text() {
  let s = store().await;
  let created = s.create_entry(NewEntry::new("draft")).await.unwrap();

  s.update_entry_content(created.id, "final".to_string())
    .await
    .unwrap();

  let fetched = s.get_entry(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.content, "final");
}

#[tokio::test]
async fn update_entry_content_missing_errors() {
  let s = store().await;
  let err = s
    .update_entry_content(42, "whatever".to_string())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::EntryNotFound(42)));
}

// ─── Keyword replacement ─────────────────────────────────────────────────────

#[tokio::test]
async fn replace_keywords_swaps_full_set() {
  let s = store().await;
  let created = s
    .create_entry(entry_with_keywords("day one", &["old1", "old2"]))
    .await
    .unwrap();

  let stored = s
    .replace_entry_keywords(created.id, vec!["new".to_string(), " padded ".to_string()])
    .await
    .unwrap();
  assert_eq!(stored, ["new", "padded"]);

  let fetched = s.get_entry(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.keywords, ["new", "padded"]);
}

#[tokio::test]
async fn replace_keywords_empty_list_clears() {
  let s = store().await;
  let created = s
    .create_entry(entry_with_keywords("day two", &["a", "b"]))
    .await
    .unwrap();

  s.replace_entry_keywords(created.id, Vec::new()).await.unwrap();

  let fetched = s.get_entry(created.id).await.unwrap().unwrap();
  assert!(fetched.keywords.is_empty());
}

#[tokio::test]
async fn replace_keywords_missing_entry_errors() {
  let s = store().await;
  let err = s
    .replace_entry_keywords(7, vec!["x".to_string()])
    .await
    .unwrap_err();
  assert!(matches!(err, Error::EntryNotFound(7)));
}

#[tokio::test]
async fn concurrent_replacements_leave_one_full_set() {
  let s = store().await;
  let created = s.create_entry(NewEntry::new("contended")).await.unwrap();

  let first: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
  let second: Vec<String> = vec!["x".into(), "y".into()];

  let (r1, r2) = tokio::join!(
    s.replace_entry_keywords(created.id, first.clone()),
    s.replace_entry_keywords(created.id, second.clone()),
  );
  r1.unwrap();
  r2.unwrap();

  // Whichever replacement committed last wins; never an interleaved mix.
  let fetched = s.get_entry(created.id).await.unwrap().unwrap();
  assert!(
    fetched.keywords == first || fetched.keywords == second,
    "interleaved keyword set: {:?}",
    fetched.keywords
  );
}

// ─── Entry deletion and cascade ──────────────────────────────────────────────

#[tokio::test]
async fn delete_entry_cascades_to_tags_and_keywords() {
  let s = store().await;
  let doomed = s
    .create_entry(entry_with_keywords("doomed", &["k1", "k2", "k3"]))
    .await
    .unwrap();
  let survivor = s
    .create_entry(entry_with_keywords("survivor", &["keep"]))
    .await
    .unwrap();

  s.create_tag(tag(doomed.id, 0, "mood")).await.unwrap();
  s.create_tag(tag(doomed.id, 1, "weather")).await.unwrap();
  s.create_tag(tag(survivor.id, 0, "mood")).await.unwrap();

  s.delete_entry(doomed.id).await.unwrap();

  assert!(s.get_entry(doomed.id).await.unwrap().is_none());
  assert!(s.list_tags(Some(doomed.id)).await.unwrap().is_empty());

  // Unrelated rows are untouched.
  let all_tags = s.list_tags(None).await.unwrap();
  assert_eq!(all_tags.len(), 1);
  assert_eq!(all_tags[0].entry_id, survivor.id);

  let keywords = s.list_keywords().await.unwrap();
  assert_eq!(keywords.len(), 1);
  assert_eq!(keywords[0].entry_id, survivor.id);
  assert_eq!(keywords[0].keyword, "keep");
}

#[tokio::test]
async fn delete_entry_missing_errors() {
  let s = store().await;
  let err = s.delete_entry(1234).await.unwrap_err();
  assert!(matches!(err, Error::EntryNotFound(1234)));
}

#[tokio::test]
async fn entry_ids_are_not_reused_after_delete() {
  let s = store().await;

  let first = s.create_entry(NewEntry::new("one")).await.unwrap();
  s.delete_entry(first.id).await.unwrap();

  let second = s.create_entry(NewEntry::new("two")).await.unwrap();
  assert!(second.id > first.id);
}

// ─── Tags ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_list_tags() {
  let s = store().await;
  let entry = s.create_entry(NewEntry::new("tagged")).await.unwrap();

  let created = s.create_tag(tag(entry.id, 2, "gratitude")).await.unwrap();
  assert_eq!(created.entry_id, entry.id);
  assert_eq!(created.sentence_index, 2);
  assert_eq!(created.tag, "gratitude");

  let for_entry = s.list_tags(Some(entry.id)).await.unwrap();
  assert_eq!(for_entry.len(), 1);
  assert_eq!(for_entry[0].id, created.id);
}

#[tokio::test]
async fn create_tag_missing_entry_errors() {
  let s = store().await;
  let err = s.create_tag(tag(99, 0, "orphan")).await.unwrap_err();
  assert!(matches!(err, Error::EntryNotFound(99)));
}

#[tokio::test]
async fn list_tags_scoped_and_system_wide() {
  let s = store().await;
  let a = s.create_entry(NewEntry::new("a")).await.unwrap();
  let b = s.create_entry(NewEntry::new("b")).await.unwrap();

  s.create_tag(tag(a.id, 0, "one")).await.unwrap();
  s.create_tag(tag(b.id, 0, "two")).await.unwrap();
  s.create_tag(tag(b.id, 1, "three")).await.unwrap();

  assert_eq!(s.list_tags(Some(a.id)).await.unwrap().len(), 1);
  assert_eq!(s.list_tags(Some(b.id)).await.unwrap().len(), 2);
  assert_eq!(s.list_tags(None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn delete_tag_removes_exactly_one() {
  let s = store().await;
  let entry = s.create_entry(NewEntry::new("tagged")).await.unwrap();
  let keep = s.create_tag(tag(entry.id, 0, "keep")).await.unwrap();
  let gone = s.create_tag(tag(entry.id, 1, "gone")).await.unwrap();

  s.delete_tag(gone.id).await.unwrap();

  let remaining = s.list_tags(None).await.unwrap();
  assert_eq!(remaining.len(), 1);
  assert_eq!(remaining[0].id, keep.id);
}

#[tokio::test]
async fn delete_tag_missing_errors() {
  let s = store().await;
  let err = s.delete_tag(5).await.unwrap_err();
  assert!(matches!(err, Error::TagNotFound(5)));
}

// ─── Keywords ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_keywords_system_wide() {
  let s = store().await;
  let a = s
    .create_entry(entry_with_keywords("a", &["k1", "k2"]))
    .await
    .unwrap();
  let b = s.create_entry(entry_with_keywords("b", &["k3"])).await.unwrap();

  let all = s.list_keywords().await.unwrap();
  assert_eq!(all.len(), 3);
  assert_eq!(all.iter().filter(|k| k.entry_id == a.id).count(), 2);
  assert_eq!(all.iter().filter(|k| k.entry_id == b.id).count(), 1);
}

#[tokio::test]
async fn schema_init_is_idempotent() {
  // Opening two stores over the same file applies the schema twice.
  let dir = std::env::temp_dir().join(format!("journal-test-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("idempotent.db");

  let first = SqliteStore::open(&path).await.unwrap();
  let entry = first.create_entry(NewEntry::new("persisted")).await.unwrap();
  drop(first);

  let second = SqliteStore::open(&path).await.unwrap();
  let fetched = second.get_entry(entry.id).await.unwrap();
  assert_eq!(fetched.unwrap().content, "persisted");

  std::fs::remove_dir_all(&dir).ok();
}
