use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbMovie {
    pub movie_id: i64,
    pub title: String,
    pub year: i64,
    pub imdb_rating: f64,
    pub imdb_votes: i64,
    pub raw_script_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbCharacter {
    pub character_id: i64,
    /// Corpus names are uppercase and may be missing entirely.
    pub name: Option<String>,
    pub movie_id: i64,
    pub gender: Option<String>,
    pub age: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbConversation {
    pub conversation_id: i64,
    pub character1_id: i64,
    pub character2_id: i64,
    pub movie_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbLine {
    pub line_id: i64,
    pub character_id: i64,
    pub movie_id: i64,
    pub conversation_id: i64,
    /// 1-based position within the conversation, gap-free.
    pub line_sort: i64,
    pub line_text: String,
}
