//! Repository layer persisting lists, items and history to SQLite

mod rows;
pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
