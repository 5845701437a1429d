use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CinelinesError {
    #[error("character {0} not found")]
    CharacterNotFound(i64),

    #[error("movie {0} not found")]
    MovieNotFound(i64),

    #[error("a conversation requires two distinct characters")]
    IdenticalSpeakers,

    #[error("character {character_id} does not belong to movie {movie_id}")]
    CharacterNotInMovie { character_id: i64, movie_id: i64 },

    #[error("line {position} is spoken by character {character_id}, who is not in this conversation")]
    LineSpeakerMismatch { position: usize, character_id: i64 },

    #[error("a conversation requires at least one line")]
    EmptyConversation,

    #[error("limit must be between 1 and {max}, got {got}")]
    LimitOutOfRange { got: u32, max: u32 },

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl IntoResponse for CinelinesError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            CinelinesError::CharacterNotFound(_) | CinelinesError::MovieNotFound(_) => {
                let body = ApiErrorObject {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                    details: None,
                };
                (StatusCode::NOT_FOUND, body)
            }

            CinelinesError::IdenticalSpeakers
            | CinelinesError::CharacterNotInMovie { .. }
            | CinelinesError::LineSpeakerMismatch { .. }
            | CinelinesError::EmptyConversation
            | CinelinesError::LimitOutOfRange { .. } => {
                let body = ApiErrorObject {
                    code: "INVALID_INPUT".to_string(),
                    message: self.to_string(),
                    details: None,
                };
                (StatusCode::BAD_REQUEST, body)
            }

            // Internal detail never reaches the client.
            CinelinesError::RactorError(_) | CinelinesError::DatabaseError(_) => {
                let body = ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
