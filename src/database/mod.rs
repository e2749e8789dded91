//! Database layer for the item store
//!
//! Handles SQLite database operations including:
//! - Idempotent schema creation
//! - One query function per CRUD statement on the `items` table

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;
