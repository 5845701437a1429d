use crate::db::schema::SQLITE_INIT;
use crate::db::writer::{self, ConversationDraft, WriterHandle};
use crate::error::CinelinesError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Shared database handle: a pool for concurrent reads plus the serialized
/// write path. Cheap to clone, one per process.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
    writer: WriterHandle,
}

impl Store {
    /// Opens the database (creating it if missing), applies the schema and
    /// spawns the writer actor.
    pub async fn connect(database_url: &str) -> Result<Self, CinelinesError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        apply_schema(&pool).await?;

        let writer = writer::spawn(pool.clone()).await;

        info!("store initialized");
        Ok(Self { pool, writer })
    }

    /// Read-side pool. Queries take this directly; they never go through
    /// the writer actor.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Validates and persists a conversation with its lines via the writer
    /// actor, returning the database-assigned conversation id.
    pub async fn add_conversation(&self, draft: ConversationDraft) -> Result<i64, CinelinesError> {
        self.writer.add_conversation(draft).await
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), CinelinesError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
