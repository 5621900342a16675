//! SQL DDL for initializing the user storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` TEXT PRIMARY KEY (caller-assigned identifier)
/// - `name` TEXT NULL
/// - `created_at` defaulted by the engine at insert time
///
/// Additive-only evolution: new tables and columns ride on `IF NOT EXISTS`;
/// altering an existing column needs a real migration tool.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;
