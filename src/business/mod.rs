//! Business logic layer for the item store
//!
//! Provides the `ItemStore` handle that parses request input and maps each
//! CRUD operation onto a single SQL statement.

pub mod input;
pub mod store;

pub use input::ItemForm;
pub use store::ItemStore;
