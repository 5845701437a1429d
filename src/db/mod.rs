//! Database module: models, schema and the write path.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: pool construction and the shared `Store` handle
//! - `writer.rs`: actor serializing all mutations

pub mod models;
pub mod schema;
pub mod store;
pub mod writer;

pub use models::{DbCharacter, DbConversation, DbLine, DbMovie};
pub use schema::SQLITE_INIT;
pub use store::Store;
pub use writer::{ConversationDraft, LineDraft};
