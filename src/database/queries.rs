//! SQL query operations for database access
//!
//! Every function here executes exactly one statement against the `items`
//! table. For input parsing and request-level operations, use `ItemStore`.

use rusqlite::{Connection, params};
use crate::error::Result;
use super::models::Item;

/// Get all items in storage order
pub fn get_all_items(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare("SELECT id, name, price FROM items")?;

    let items = stmt.query_map([], |row| {
        Ok(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
        })
    })?;

    items.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Insert a new item and return its assigned id
pub fn insert_item(conn: &Connection, name: &str, price: f64) -> Result<i64> {
    conn.execute(
        "INSERT INTO items (name, price) VALUES (?, ?)",
        params![name, price],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update name and price of an item
///
/// Returns the number of rows changed; zero when no row has this id.
pub fn update_item(conn: &Connection, id: i64, name: &str, price: f64) -> Result<usize> {
    let changed = conn.execute(
        "UPDATE items SET name = ?, price = ? WHERE id = ?",
        params![name, price, id],
    )?;
    Ok(changed)
}

/// Delete an item by its raw id text
///
/// The id is bound as text; SQLite's integer affinity on `id` makes numeric
/// text match. Anything else matches nothing.
pub fn delete_item(conn: &Connection, id: &str) -> Result<usize> {
    let changed = conn.execute("DELETE FROM items WHERE id = ?", params![id])?;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::CREATE_ITEMS_TABLE;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(CREATE_ITEMS_TABLE, []).unwrap();
        conn
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let conn = setup();
        let first = insert_item(&conn, "Widget", 9.99).unwrap();
        let second = insert_item(&conn, "Gadget", 1.5).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_get_all_items_in_insertion_order() {
        let conn = setup();
        insert_item(&conn, "b", 2.0).unwrap();
        insert_item(&conn, "a", 1.0).unwrap();

        let items = get_all_items(&conn).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_update_missing_id_changes_nothing() {
        let conn = setup();
        insert_item(&conn, "Widget", 9.99).unwrap();

        assert_eq!(update_item(&conn, 42, "Other", 1.0).unwrap(), 0);
        assert_eq!(get_all_items(&conn).unwrap()[0].name, "Widget");
    }

    #[test]
    fn test_delete_by_numeric_text() {
        let conn = setup();
        let id = insert_item(&conn, "Widget", 9.99).unwrap();

        assert_eq!(delete_item(&conn, &id.to_string()).unwrap(), 1);
        assert!(get_all_items(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_delete_non_numeric_text_matches_nothing() {
        let conn = setup();
        insert_item(&conn, "Widget", 9.99).unwrap();

        assert_eq!(delete_item(&conn, "abc").unwrap(), 0);
        assert_eq!(delete_item(&conn, "").unwrap(), 0);
        assert_eq!(get_all_items(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_autoincrement_does_not_reuse_ids() {
        let conn = setup();
        let id = insert_item(&conn, "Widget", 9.99).unwrap();
        delete_item(&conn, &id.to_string()).unwrap();

        let next = insert_item(&conn, "Gadget", 1.0).unwrap();
        assert!(next > id);
    }
}
