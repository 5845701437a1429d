//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `movies` table (one film per row)
/// - `characters` table (one speaking character per row, belongs to a movie)
/// - `conversations` table (one exchange between two characters of a movie)
/// - `lines` table (one spoken line per row, ordered within its conversation)
///
/// Ids are rowid aliases (`INTEGER PRIMARY KEY`), so inserts without an
/// explicit id get the next id assigned by SQLite inside the insert itself.
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Movies
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS movies (
    movie_id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    year INTEGER NOT NULL,
    imdb_rating REAL NOT NULL,
    imdb_votes INTEGER NOT NULL,
    raw_script_url TEXT NULL
);

-- ---------------------------------------------------------------------------
-- Characters (each belongs to exactly one movie)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS characters (
    character_id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NULL,
    movie_id INTEGER NOT NULL REFERENCES movies(movie_id),
    gender TEXT NULL,
    age INTEGER NULL
);

CREATE INDEX IF NOT EXISTS idx_characters_movie ON characters(movie_id);

-- ---------------------------------------------------------------------------
-- Conversations (two distinct characters of one movie)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS conversations (
    conversation_id INTEGER PRIMARY KEY NOT NULL,
    character1_id INTEGER NOT NULL REFERENCES characters(character_id),
    character2_id INTEGER NOT NULL REFERENCES characters(character_id),
    movie_id INTEGER NOT NULL REFERENCES movies(movie_id),
    CHECK (character1_id <> character2_id)
);

CREATE INDEX IF NOT EXISTS idx_conversations_character1 ON conversations(character1_id);
CREATE INDEX IF NOT EXISTS idx_conversations_character2 ON conversations(character2_id);

-- ---------------------------------------------------------------------------
-- Lines (1-based, gap-free line_sort within each conversation)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS lines (
    line_id INTEGER PRIMARY KEY NOT NULL,
    character_id INTEGER NOT NULL REFERENCES characters(character_id),
    movie_id INTEGER NOT NULL REFERENCES movies(movie_id),
    conversation_id INTEGER NOT NULL REFERENCES conversations(conversation_id),
    line_sort INTEGER NOT NULL CHECK (line_sort >= 1),
    line_text TEXT NOT NULL,
    UNIQUE(conversation_id, line_sort)
);

CREATE INDEX IF NOT EXISTS idx_lines_character ON lines(character_id);
CREATE INDEX IF NOT EXISTS idx_lines_conversation ON lines(conversation_id);
CREATE INDEX IF NOT EXISTS idx_lines_movie ON lines(movie_id);
"#;
