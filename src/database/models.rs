//! Data models for item store entities

use serde::{Deserialize, Serialize};

/// A catalogue item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Row identifier, assigned by SQLite on insert
    pub id: i64,
    /// Display name (not unique, may be empty)
    pub name: String,
    /// Price, stored as REAL with no range check
    pub price: f64,
}

impl Item {
    /// Price formatted for display with two decimals
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}
