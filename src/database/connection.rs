//! Database connection management

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use crate::error::Result;
use super::schema;

/// Database connection wrapper
pub struct Database {
    /// Path to the database file
    path: PathBuf,
    /// SQLite connection, closed when the wrapper is dropped
    conn: Connection,
}

impl Database {
    /// Open a database at the specified path
    ///
    /// The file is created by SQLite if it does not exist, but no tables are
    /// created; use [`Database::create`] for bootstrap.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Open a database and create all tables that are missing
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }

        tracing::debug!(path = %path.display(), "Schema ensured");

        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
