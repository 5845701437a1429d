use crate::db::models::DbCharacter;
use crate::error::CinelinesError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

/// Input for a new conversation. Ids for the conversation and its lines are
/// assigned by the database during the insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationDraft {
    pub movie_id: i64,
    pub character_1_id: i64,
    pub character_2_id: i64,
    pub lines: Vec<LineDraft>,
}

/// One drafted line, in spoken order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDraft {
    pub character_id: i64,
    pub line_text: String,
}

#[derive(Debug)]
pub enum WriterMessage {
    /// Validate and persist a conversation with its lines; replies with the
    /// new conversation id.
    AddConversation(ConversationDraft, RpcReplyPort<Result<i64, CinelinesError>>),
}

#[derive(Clone)]
pub struct WriterHandle {
    actor: ActorRef<WriterMessage>,
}

impl WriterHandle {
    pub async fn add_conversation(&self, draft: ConversationDraft) -> Result<i64, CinelinesError> {
        ractor::call!(self.actor, WriterMessage::AddConversation, draft).map_err(|e| {
            CinelinesError::RactorError(format!("Writer AddConversation RPC failed: {e}"))
        })?
    }
}

struct WriterState {
    pool: SqlitePool,
}

struct WriterActor;

#[ractor::async_trait]
impl Actor for WriterActor {
    type Msg = WriterMessage;
    type State = WriterState;
    type Arguments = SqlitePool;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        pool: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        Ok(WriterState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            WriterMessage::AddConversation(draft, reply) => {
                let res = insert_conversation(&state.pool, draft).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

/// The whole write is one transaction; every early return drops the
/// transaction and rolls it back, so a rejected draft leaves no rows behind.
async fn insert_conversation(
    pool: &SqlitePool,
    draft: ConversationDraft,
) -> Result<i64, CinelinesError> {
    if draft.character_1_id == draft.character_2_id {
        return Err(CinelinesError::IdenticalSpeakers);
    }
    if draft.lines.is_empty() {
        return Err(CinelinesError::EmptyConversation);
    }

    let mut tx = pool.begin().await?;

    for character_id in [draft.character_1_id, draft.character_2_id] {
        let row = sqlx::query_as::<_, DbCharacter>(
            r#"
        SELECT character_id, name, movie_id, gender, age
        FROM characters
        WHERE character_id = ?1
        "#,
        )
        .bind(character_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CinelinesError::CharacterNotFound(character_id))?;

        if row.movie_id != draft.movie_id {
            return Err(CinelinesError::CharacterNotInMovie {
                character_id,
                movie_id: draft.movie_id,
            });
        }
    }

    for (idx, line) in draft.lines.iter().enumerate() {
        if line.character_id != draft.character_1_id && line.character_id != draft.character_2_id {
            return Err(CinelinesError::LineSpeakerMismatch {
                position: idx + 1,
                character_id: line.character_id,
            });
        }
    }

    let conversation_id: i64 = sqlx::query_scalar(
        r#"
    INSERT INTO conversations (character1_id, character2_id, movie_id)
    VALUES (?1, ?2, ?3)
    RETURNING conversation_id
    "#,
    )
    .bind(draft.character_1_id)
    .bind(draft.character_2_id)
    .bind(draft.movie_id)
    .fetch_one(&mut *tx)
    .await?;

    for (line_sort, line) in (1i64..).zip(draft.lines.iter()) {
        sqlx::query(
            r#"
        INSERT INTO lines (character_id, movie_id, conversation_id, line_sort, line_text)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        )
        .bind(line.character_id)
        .bind(draft.movie_id)
        .bind(conversation_id)
        .bind(line_sort)
        .bind(&line.line_text)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    debug!(
        conversation_id,
        movie_id = draft.movie_id,
        line_count = draft.lines.len(),
        "conversation persisted"
    );

    Ok(conversation_id)
}

/// Spawn the writer actor and return a cloneable handle.
pub async fn spawn(pool: SqlitePool) -> WriterHandle {
    let (actor, _jh) = ractor::Actor::spawn(Some("CinelinesWriter".to_string()), WriterActor, pool)
        .await
        .expect("failed to spawn WriterActor");

    WriterHandle { actor }
}
