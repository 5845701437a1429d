use crate::error::CinelinesError;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::{CharacterSort, Page};

/// Full profile for one character, ranked conversation partners included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterProfile {
    pub character_id: i64,
    pub character: Option<String>,
    pub movie: String,
    pub gender: Option<String>,
    pub top_conversations: Vec<ConversationPartner>,
}

/// One ranked conversation partner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ConversationPartner {
    pub character_id: i64,
    pub character: Option<String>,
    pub gender: Option<String>,
    pub number_of_lines_together: i64,
}

/// One row of the character listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CharacterSummary {
    pub character_id: i64,
    pub character: Option<String>,
    pub movie: String,
    pub number_of_lines: i64,
}

#[derive(FromRow)]
struct IdentityRow {
    character_id: i64,
    character: Option<String>,
    movie: String,
    gender: Option<String>,
}

/// Looks up one character and ranks everyone they share conversations with.
///
/// The ranking is symmetric: a conversation counts no matter which side the
/// character occupies. `number_of_lines_together` counts the lines the
/// queried character speaks across the shared conversations; a partner whose
/// shared conversations hold no such lines still appears, with 0.
pub async fn get_character(
    pool: &SqlitePool,
    character_id: i64,
) -> Result<CharacterProfile, CinelinesError> {
    let identity = sqlx::query_as::<_, IdentityRow>(
        r#"
    SELECT c.character_id, c.name AS character, m.title AS movie, c.gender
    FROM characters c
    JOIN movies m ON m.movie_id = c.movie_id
    WHERE c.character_id = ?1
    "#,
    )
    .bind(character_id)
    .fetch_optional(pool)
    .await?
    .ok_or(CinelinesError::CharacterNotFound(character_id))?;

    let top_conversations = sqlx::query_as::<_, ConversationPartner>(
        r#"
    SELECT
        p.character_id,
        p.name AS character,
        p.gender,
        COUNT(l.line_id) AS number_of_lines_together
    FROM conversations v
    JOIN characters p
        ON p.character_id = CASE WHEN v.character1_id = ?1 THEN v.character2_id ELSE v.character1_id END
    LEFT JOIN lines l
        ON l.conversation_id = v.conversation_id AND l.character_id = ?1
    WHERE v.character1_id = ?1 OR v.character2_id = ?1
    GROUP BY p.character_id
    ORDER BY number_of_lines_together DESC, p.character_id ASC
    "#,
    )
    .bind(character_id)
    .fetch_all(pool)
    .await?;

    Ok(CharacterProfile {
        character_id: identity.character_id,
        character: identity.character,
        movie: identity.movie,
        gender: identity.gender,
        top_conversations,
    })
}

/// Lists characters with their total line counts.
///
/// The name filter is a case-insensitive substring match; the empty filter
/// matches every character, including unnamed ones (which no non-empty
/// filter can match). Characters without lines are listed with 0.
pub async fn list_characters(
    pool: &SqlitePool,
    name_filter: &str,
    page: Page,
    sort: CharacterSort,
) -> Result<Vec<CharacterSummary>, CinelinesError> {
    // The ORDER BY fragment comes from the enum, never from the caller.
    let sql = format!(
        r#"
    SELECT
        c.character_id,
        c.name AS character,
        m.title AS movie,
        COUNT(l.line_id) AS number_of_lines
    FROM characters c
    JOIN movies m ON m.movie_id = c.movie_id
    LEFT JOIN lines l ON l.character_id = c.character_id
    WHERE ?1 = '' OR (c.name IS NOT NULL AND instr(lower(c.name), lower(?1)) > 0)
    GROUP BY c.character_id
    ORDER BY {}
    LIMIT ?2 OFFSET ?3
    "#,
        sort.order_by()
    );

    let rows = sqlx::query_as::<_, CharacterSummary>(&sql)
        .bind(name_filter)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
