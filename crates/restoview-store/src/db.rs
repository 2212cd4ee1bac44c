//! Database connection management
//!
//! The caller owns the `Connection` returned here and passes it (or a
//! `Transaction` borrowed from it) to every repository and query function.
//! Dropping it closes the database.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default on-disk location used by the CLI
pub const DEFAULT_DB_PATH: &str = ".restoview/restaurants.db";

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
    /// Turn on `PRAGMA foreign_keys` so review references are checked
    pub enforce_foreign_keys: bool,
    /// Use write-ahead logging for file-backed databases
    pub wal: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enforce_foreign_keys: true,
            wal: true,
        }
    }

    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }

    pub fn with_wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

/// Open a SQLite database at the given path without configuring it
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open the database described by `config`, creating its parent directory
/// if needed, and apply the configured pragmas
pub fn open_with_config(config: &StoreConfig) -> Result<Connection> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("open_store", e))?;
        }
    }

    let conn = open(&config.path)?;
    configure_with(&conn, config)?;
    tracing::debug!(path = %config.path.display(), "opened store");
    Ok(conn)
}

/// Open an in-memory SQLite database with foreign keys enforced (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    set_foreign_keys(&conn, true)?;
    Ok(conn)
}

/// Configure a connection with the default settings
pub fn configure(conn: &Connection) -> Result<()> {
    configure_with(conn, &StoreConfig::default())
}

/// Apply the pragmas selected in `config`
pub fn configure_with(conn: &Connection, config: &StoreConfig) -> Result<()> {
    set_foreign_keys(conn, config.enforce_foreign_keys)?;

    if config.wal {
        // journal_mode answers with the mode actually in effect
        let mode: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        tracing::debug!(journal_mode = %mode, "journal mode set");
    }

    Ok(())
}

fn set_foreign_keys(conn: &Connection, enforce: bool) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", enforce)
        .map_err(from_rusqlite)
}

/// Whether foreign key enforcement is on for this connection
pub fn foreign_keys_enabled(conn: &Connection) -> Result<bool> {
    conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .map_err(from_rusqlite)
}
