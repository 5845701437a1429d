use crate::db::{ConversationDraft, LineDraft};
use crate::error::CinelinesError;
use crate::server::router::CinelinesState;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use serde::{Deserialize, Serialize};

pub fn router() -> Router<CinelinesState> {
    Router::new().route(
        "/movies/{movie_id}/conversations",
        post(add_conversation_handler),
    )
}

#[derive(Debug, Deserialize)]
struct ConversationPayload {
    character_1_id: i64,
    character_2_id: i64,
    #[serde(default)]
    lines: Vec<LineDraft>,
}

#[derive(Debug, Serialize)]
struct ConversationCreated {
    conversation_id: i64,
}

async fn add_conversation_handler(
    State(state): State<CinelinesState>,
    Path(movie_id): Path<i64>,
    Json(payload): Json<ConversationPayload>,
) -> Result<Json<ConversationCreated>, CinelinesError> {
    let draft = ConversationDraft {
        movie_id,
        character_1_id: payload.character_1_id,
        character_2_id: payload.character_2_id,
        lines: payload.lines,
    };

    let conversation_id = state.store.add_conversation(draft).await?;
    Ok(Json(ConversationCreated { conversation_id }))
}
