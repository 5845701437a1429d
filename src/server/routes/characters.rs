use crate::error::CinelinesError;
use crate::queries::{self, CharacterProfile, CharacterSort, CharacterSummary, Page};
use crate::server::router::CinelinesState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

pub fn router() -> Router<CinelinesState> {
    Router::new()
        .route("/characters", get(list_characters_handler))
        .route("/characters/{character_id}", get(get_character_handler))
}

#[derive(Debug, Deserialize)]
struct CharacterListParams {
    #[serde(default)]
    name: String,
    #[serde(default = "default_list_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
    #[serde(default)]
    sort: CharacterSort,
}

fn default_list_limit() -> u32 {
    50
}

async fn get_character_handler(
    State(state): State<CinelinesState>,
    Path(character_id): Path<i64>,
) -> Result<Json<CharacterProfile>, CinelinesError> {
    let profile = queries::get_character(state.store.pool(), character_id).await?;
    Ok(Json(profile))
}

async fn list_characters_handler(
    State(state): State<CinelinesState>,
    Query(params): Query<CharacterListParams>,
) -> Result<Json<Vec<CharacterSummary>>, CinelinesError> {
    let page = Page::new(params.limit, params.offset)?;
    let rows =
        queries::list_characters(state.store.pool(), &params.name, page, params.sort).await?;
    Ok(Json(rows))
}
