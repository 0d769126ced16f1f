//! Core types and trait definitions for the journal store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entry;
pub mod error;
pub mod keyword;
pub mod store;
pub mod tag;

pub use error::{Error, Result};
