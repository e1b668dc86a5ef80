//! todolog store - SQLite persistence for lists, items and status history
//!
//! Provides:
//! - Connection configuration (`db`)
//! - Embedded, checksummed schema migrations
//! - `SqliteStore`, the SQLite implementation of `TodoRepository`

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::StoreConfig;
pub use errors::Result;
pub use repo::SqliteStore;
