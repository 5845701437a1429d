use crate::error::CinelinesError;
use crate::queries::{self, MovieProfile, MovieSort, MovieSummary, Page};
use crate::server::router::CinelinesState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

pub fn router() -> Router<CinelinesState> {
    Router::new()
        .route("/movies", get(list_movies_handler))
        .route("/movies/{movie_id}", get(get_movie_handler))
}

#[derive(Debug, Deserialize)]
struct MovieListParams {
    #[serde(default)]
    name: String,
    #[serde(default = "default_list_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
    #[serde(default)]
    sort: MovieSort,
}

fn default_list_limit() -> u32 {
    50
}

async fn get_movie_handler(
    State(state): State<CinelinesState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<MovieProfile>, CinelinesError> {
    let profile = queries::get_movie(state.store.pool(), movie_id).await?;
    Ok(Json(profile))
}

async fn list_movies_handler(
    State(state): State<CinelinesState>,
    Query(params): Query<MovieListParams>,
) -> Result<Json<Vec<MovieSummary>>, CinelinesError> {
    let page = Page::new(params.limit, params.offset)?;
    let rows = queries::list_movies(state.store.pool(), &params.name, page, params.sort).await?;
    Ok(Json(rows))
}
