//! Item store operations
//!
//! `ItemStore` holds only the database path. Each operation opens its own
//! connection, runs one statement and drops the connection, so concurrent
//! requests are serialized by SQLite's own locking.

use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::database::{Database, Item, queries};
use super::input::{parse_id, parse_price};

/// Handle to the items database, passed explicitly to every handler
#[derive(Debug, Clone)]
pub struct ItemStore {
    db_path: PathBuf,
}

impl ItemStore {
    /// Open the store at `db_path`, creating the `items` table if it is missing
    pub fn open(db_path: &Path) -> Result<Self> {
        Database::create(db_path)?;
        tracing::info!(path = %db_path.display(), "Item store ready");
        Ok(Self { db_path: db_path.to_path_buf() })
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn database(&self) -> Result<Database> {
        Database::open(&self.db_path)
    }

    /// Get all items in storage order
    pub fn list(&self) -> Result<Vec<Item>> {
        let db = self.database()?;
        queries::get_all_items(db.connection())
    }

    /// Create an item from raw form text and return its id
    ///
    /// The price is parsed before the database is touched, so a bad price
    /// never inserts a row.
    pub fn create(&self, name: &str, price: &str) -> Result<i64> {
        let price = parse_price(price)?;

        let db = self.database()?;
        let id = queries::insert_item(db.connection(), name, price)?;

        tracing::info!(id, name = %name, price, "Item created");
        Ok(id)
    }

    /// Update an item from raw path and form text
    ///
    /// An id with no matching row is not an error; the returned count is 0.
    pub fn update(&self, id: &str, name: &str, price: &str) -> Result<usize> {
        let id = parse_id(id)?;
        let price = parse_price(price)?;

        let db = self.database()?;
        let changed = queries::update_item(db.connection(), id, name, price)?;

        if changed == 0 {
            tracing::debug!(id, "Update matched no item");
        } else {
            tracing::info!(id, name = %name, price, "Item updated");
        }
        Ok(changed)
    }

    /// Delete an item by raw id text
    ///
    /// The id is not validated; anything that matches no row is a no-op.
    pub fn delete(&self, id: &str) -> Result<usize> {
        let db = self.database()?;
        let changed = queries::delete_item(db.connection(), id)?;

        if changed == 0 {
            tracing::debug!(id, "Delete matched no item");
        } else {
            tracing::info!(id, "Item deleted");
        }
        Ok(changed)
    }
}
