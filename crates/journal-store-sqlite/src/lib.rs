//! SQLite backend for the journal store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. A side effect of the single
//! connection thread is that overlapping operations on the same entry are
//! serialised: each one runs to completion inside its own transaction.

mod encode;
mod schema;
mod store;

pub use store::SqliteStore;

#[cfg(test)]
mod tests;
