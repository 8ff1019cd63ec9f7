//! Database connection management
//!
//! Provides utilities for opening and managing SQLite connections

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| from_rusqlite("open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| from_rusqlite("open_in_memory", e))
}

/// Configure a connection with optimal settings
pub fn configure(conn: &Connection) -> Result<()> {
    // Enable foreign keys
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(|e| from_rusqlite("configure", e))?;

    // Set WAL mode for better concurrency
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| from_rusqlite("configure", e))?;

    // Concurrent units of work each hold their own connection; wait out
    // writer contention instead of failing with SQLITE_BUSY
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(|e| from_rusqlite("configure", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_and_configure() {
        let temp_dir = TempDir::new().unwrap();
        let conn = open(temp_dir.path().join("test.db")).unwrap();
        configure(&conn).unwrap();

        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_open_in_memory() {
        let conn = open_in_memory().unwrap();
        configure(&conn).unwrap();
    }
}
