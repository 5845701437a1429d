use crate::error::CinelinesError;
use crate::queries::{self, CharacterConversations, CharacterLines, Page};
use crate::server::router::CinelinesState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

pub fn router() -> Router<CinelinesState> {
    Router::new()
        .route("/lines/{character_id}", get(get_lines_handler))
        .route(
            "/lines/{character_id}/conversations",
            get(get_conversations_handler),
        )
        .route(
            "/lines/{character_id}/longest",
            get(get_longest_lines_handler),
        )
}

#[derive(Debug, Deserialize)]
struct LongestLinesParams {
    #[serde(default = "default_longest_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
}

fn default_longest_limit() -> u32 {
    10
}

async fn get_lines_handler(
    State(state): State<CinelinesState>,
    Path(character_id): Path<i64>,
) -> Result<Json<CharacterLines>, CinelinesError> {
    let lines = queries::get_lines(state.store.pool(), character_id).await?;
    Ok(Json(lines))
}

async fn get_conversations_handler(
    State(state): State<CinelinesState>,
    Path(character_id): Path<i64>,
) -> Result<Json<CharacterConversations>, CinelinesError> {
    let conversations = queries::get_conversations(state.store.pool(), character_id).await?;
    Ok(Json(conversations))
}

async fn get_longest_lines_handler(
    State(state): State<CinelinesState>,
    Path(character_id): Path<i64>,
    Query(params): Query<LongestLinesParams>,
) -> Result<Json<CharacterLines>, CinelinesError> {
    let page = Page::new(params.limit, params.offset)?;
    let lines = queries::get_longest_lines(state.store.pool(), character_id, page).await?;
    Ok(Json(lines))
}
