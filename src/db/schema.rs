//! SQL DDL for initializing the database schema.

/// SQLite schema includes:
/// - `characters` table (one row per character, unique case-insensitive `name`)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS characters (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL COLLATE NOCASE,
    height TEXT NULL,
    mass TEXT NULL,
    hair_color TEXT NULL,
    skin_color TEXT NULL,
    eye_color TEXT NULL,
    birth_year TEXT NULL,
    gender TEXT NULL,
    favorite INTEGER NOT NULL DEFAULT 0,
    UNIQUE(name)
);

CREATE INDEX IF NOT EXISTS idx_characters_favorite ON characters(favorite);
"#;
