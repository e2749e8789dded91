//! Database schema definitions

/// SQL to create the items table
pub const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    price   REAL NOT NULL
)
"#;

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[CREATE_ITEMS_TABLE];
