//! Read-side query functions.
//!
//! Every function here takes the shared pool directly and performs no
//! mutation. Derived values (line counts, partner rankings, orderings)
//! are computed per query, never stored.

pub mod characters;
pub mod lines;
pub mod movies;

pub use characters::{
    CharacterProfile, CharacterSummary, ConversationPartner, get_character, list_characters,
};
pub use lines::{
    CharacterConversations, CharacterLines, SpokenLine, get_conversations, get_lines,
    get_longest_lines,
};
pub use movies::{MovieProfile, MovieSummary, TopCharacter, get_movie, list_movies};

use crate::error::CinelinesError;
use serde::{Deserialize, Serialize};

/// Largest page size a single request may ask for.
pub const MAX_LIMIT: u32 = 250;

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: u32,
    offset: u32,
}

impl Page {
    /// Rejects limits outside `1..=MAX_LIMIT`. Any offset is accepted; an
    /// offset past the end of a result set yields an empty page, not an
    /// error.
    pub fn new(limit: u32, offset: u32) -> Result<Self, CinelinesError> {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(CinelinesError::LimitOutOfRange {
                got: limit,
                max: MAX_LIMIT,
            });
        }
        Ok(Self { limit, offset })
    }

    pub fn limit(self) -> i64 {
        i64::from(self.limit)
    }

    pub fn offset(self) -> i64 {
        i64::from(self.offset)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

/// Sort orders for `list_characters`. The serde names are the wire values
/// accepted in the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSort {
    #[default]
    Character,
    Movie,
    NumberOfLines,
}

impl CharacterSort {
    /// ORDER BY fragment. Every variant carries a `character_id` tie-break
    /// so successive pages never overlap or skip rows.
    pub(crate) fn order_by(self) -> &'static str {
        match self {
            // Unnamed characters sort after all named ones.
            CharacterSort::Character => "(c.name IS NULL), c.name ASC, c.character_id ASC",
            CharacterSort::Movie => "m.title ASC, c.character_id ASC",
            CharacterSort::NumberOfLines => "number_of_lines DESC, c.character_id ASC",
        }
    }
}

/// Sort orders for `list_movies`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieSort {
    #[default]
    MovieTitle,
    Year,
    Rating,
}

impl MovieSort {
    pub(crate) fn order_by(self) -> &'static str {
        match self {
            MovieSort::MovieTitle => "m.title ASC, m.movie_id ASC",
            MovieSort::Year => "m.year ASC, m.movie_id ASC",
            MovieSort::Rating => "m.imdb_rating DESC, m.movie_id ASC",
        }
    }
}
