//! HTTP surface for the item store
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/` | list page |
//! | POST | `/items` | create, redirect to `/` |
//! | POST | `/items/{id}` | update, redirect to `/` |
//! | DELETE | `/items/{id}` | delete, `200 OK` |

pub mod handlers;
pub mod render;
pub mod server;

pub use server::{router, Server};
