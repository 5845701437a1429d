use crate::db::models::DbMovie;
use crate::error::CinelinesError;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::{MovieSort, Page};

/// Movie detail plus its five most talkative characters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieProfile {
    pub movie_id: i64,
    pub title: String,
    pub top_characters: Vec<TopCharacter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct TopCharacter {
    pub character_id: i64,
    pub character: Option<String>,
    pub num_lines: i64,
}

/// One row of the movie listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct MovieSummary {
    pub movie_id: i64,
    pub movie_title: String,
    pub year: i64,
    pub imdb_rating: f64,
    pub imdb_votes: i64,
}

/// Looks up one movie and its top 5 characters by spoken lines. Characters
/// without lines never rank.
pub async fn get_movie(pool: &SqlitePool, movie_id: i64) -> Result<MovieProfile, CinelinesError> {
    let movie = sqlx::query_as::<_, DbMovie>(
        r#"
    SELECT movie_id, title, year, imdb_rating, imdb_votes, raw_script_url
    FROM movies
    WHERE movie_id = ?1
    "#,
    )
    .bind(movie_id)
    .fetch_optional(pool)
    .await?
    .ok_or(CinelinesError::MovieNotFound(movie_id))?;

    let top_characters = sqlx::query_as::<_, TopCharacter>(
        r#"
    SELECT c.character_id, c.name AS character, COUNT(l.line_id) AS num_lines
    FROM characters c
    JOIN lines l ON l.character_id = c.character_id
    WHERE c.movie_id = ?1
    GROUP BY c.character_id
    ORDER BY num_lines DESC, c.character_id ASC
    LIMIT 5
    "#,
    )
    .bind(movie_id)
    .fetch_all(pool)
    .await?;

    Ok(MovieProfile {
        movie_id: movie.movie_id,
        title: movie.title,
        top_characters,
    })
}

/// Lists movies, filtered by case-insensitive substring on the title.
pub async fn list_movies(
    pool: &SqlitePool,
    name_filter: &str,
    page: Page,
    sort: MovieSort,
) -> Result<Vec<MovieSummary>, CinelinesError> {
    let sql = format!(
        r#"
    SELECT m.movie_id, m.title AS movie_title, m.year, m.imdb_rating, m.imdb_votes
    FROM movies m
    WHERE ?1 = '' OR instr(lower(m.title), lower(?1)) > 0
    ORDER BY {}
    LIMIT ?2 OFFSET ?3
    "#,
        sort.order_by()
    );

    let rows = sqlx::query_as::<_, MovieSummary>(&sql)
        .bind(name_filter)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
