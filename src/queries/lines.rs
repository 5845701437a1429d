use crate::db::models::DbCharacter;
use crate::error::CinelinesError;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::Page;

/// A character's spoken lines, longest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterLines {
    pub character: Option<String>,
    pub lines: Vec<SpokenLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct SpokenLine {
    pub line_id: i64,
    pub conversation_id: i64,
    pub line_text: String,
}

/// Ids of every conversation a character takes part in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterConversations {
    pub character: Option<String>,
    pub conversations: Vec<i64>,
}

async fn fetch_character(
    pool: &SqlitePool,
    character_id: i64,
) -> Result<DbCharacter, CinelinesError> {
    sqlx::query_as::<_, DbCharacter>(
        r#"
    SELECT character_id, name, movie_id, gender, age
    FROM characters
    WHERE character_id = ?1
    "#,
    )
    .bind(character_id)
    .fetch_optional(pool)
    .await?
    .ok_or(CinelinesError::CharacterNotFound(character_id))
}

/// Every line the character speaks, longest first. "Longest" means the
/// character count of the text; ties go to the lower line id.
pub async fn get_lines(
    pool: &SqlitePool,
    character_id: i64,
) -> Result<CharacterLines, CinelinesError> {
    let character = fetch_character(pool, character_id).await?;

    let lines = sqlx::query_as::<_, SpokenLine>(
        r#"
    SELECT line_id, conversation_id, line_text
    FROM lines
    WHERE character_id = ?1
    ORDER BY length(line_text) DESC, line_id ASC
    "#,
    )
    .bind(character_id)
    .fetch_all(pool)
    .await?;

    Ok(CharacterLines {
        character: character.name,
        lines,
    })
}

/// Same ordering as `get_lines`, windowed by the page.
pub async fn get_longest_lines(
    pool: &SqlitePool,
    character_id: i64,
    page: Page,
) -> Result<CharacterLines, CinelinesError> {
    let character = fetch_character(pool, character_id).await?;

    let lines = sqlx::query_as::<_, SpokenLine>(
        r#"
    SELECT line_id, conversation_id, line_text
    FROM lines
    WHERE character_id = ?1
    ORDER BY length(line_text) DESC, line_id ASC
    LIMIT ?2 OFFSET ?3
    "#,
    )
    .bind(character_id)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(CharacterLines {
        character: character.name,
        lines,
    })
}

/// Conversation ids for either participant slot, ascending.
pub async fn get_conversations(
    pool: &SqlitePool,
    character_id: i64,
) -> Result<CharacterConversations, CinelinesError> {
    let character = fetch_character(pool, character_id).await?;

    let conversations: Vec<i64> = sqlx::query_scalar(
        r#"
    SELECT conversation_id
    FROM conversations
    WHERE character1_id = ?1 OR character2_id = ?1
    ORDER BY conversation_id
    "#,
    )
    .bind(character_id)
    .fetch_all(pool)
    .await?;

    Ok(CharacterConversations {
        character: character.name,
        conversations,
    })
}
