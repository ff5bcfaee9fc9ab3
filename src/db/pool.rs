//! Single SQLite connection for one CLI invocation.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file at `path`.
    pub fn new(path: &str) -> Result<Self> {
        Self::wrap(Connection::open(Path::new(path))?)
    }

    /// Private in-memory database, used by tests and dry runs.
    pub fn in_memory() -> Result<Self> {
        Self::wrap(Connection::open_in_memory()?)
    }

    fn wrap(conn: Connection) -> Result<Self> {
        // gift_ideas cascades rely on this
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// `PRAGMA integrity_check` result: "ok" or the first problem found.
    pub fn integrity_check(&self) -> Result<String> {
        self.conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))
    }

    /// Rebuild the file to reclaim free pages.
    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute_batch("VACUUM;")
    }
}
