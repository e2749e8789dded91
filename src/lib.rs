//! # itemstore
//!
//! A minimal item catalogue served over HTML forms.
//!
//! ## Features
//!
//! - SQLite storage of items (id, name, price)
//! - Create, update and delete through form submissions
//! - Server-rendered list page
//! - Layered configuration and structured logging
//!
//! ## Example
//!
//! ```no_run
//! use itemstore::ItemStore;
//! use std::path::Path;
//!
//! let store = ItemStore::open(Path::new("items.db")).unwrap();
//! store.create("Widget", "9.99").unwrap();
//!
//! for item in store.list().unwrap() {
//!     println!("{}: {} ({})", item.id, item.name, item.display_price());
//! }
//! ```

pub mod database;
pub mod business;
pub mod config;
pub mod logging;
pub mod web;
pub mod error;

// Re-export main types
pub use error::{StoreError, Result};
pub use database::models::Item;
pub use business::{ItemForm, ItemStore};
pub use config::Config;
pub use web::{router, Server};

/// Default database filename
pub const DATABASE_FILENAME: &str = "items.db";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Title of the list page
pub const PAGE_TITLE: &str = "CRUD Example";
