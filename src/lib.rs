pub mod config;
pub mod db;
pub mod error;
pub mod queries;
pub mod server;

pub use db::{ConversationDraft, LineDraft, Store};
pub use error::CinelinesError;
