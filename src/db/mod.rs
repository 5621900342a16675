//! Database module: connection pool and schema for persistent storage.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool wrapper and idempotent schema initialization

pub mod schema;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{Database, SqlitePool};
