//! Database connection management

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default on-disk location, relative to the working directory
pub const DEFAULT_DB_PATH: &str = ".todolog/todo.db";

/// Connection settings for an on-disk store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// SQLite database file
    pub path: PathBuf,
    /// Enforce the list→item and item→history foreign keys
    pub foreign_keys: bool,
    /// Use write-ahead logging
    pub wal: bool,
    /// How long a writer waits for another writer's lock
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// Settings for the database at `path`, other fields defaulted
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            foreign_keys: true,
            wal: true,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open the database described by `config`, creating its directory if needed
pub fn open_configured(config: &StoreConfig) -> Result<Connection> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
        }
    }

    let conn = open(&config.path)?;
    configure(&conn, config)?;
    Ok(conn)
}

/// Apply connection pragmas
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    if config.foreign_keys {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(from_rusqlite)?;
    }

    if config.wal {
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .map_err(from_rusqlite)?;
    }

    conn.busy_timeout(config.busy_timeout)
        .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from(DEFAULT_DB_PATH));
        assert!(config.foreign_keys);
    }

    #[test]
    fn test_configure_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        configure(&conn, &StoreConfig::default()).unwrap();

        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
