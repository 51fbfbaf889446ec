//! Core domain logic for newsnote: private notes, public news with
//! moderated comments, and the ownership gate in front of everything.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod moderation;
pub mod repo;
pub mod service;
pub mod slug;

pub use auth::{authorize, Access, Intent, Principal};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::comment::{Comment, CommentId};
pub use model::news::{News, NewsId};
pub use model::note::{Note, NoteId};
pub use model::user::{User, UserId};
pub use moderation::{ModerationFilter, Verdict, MODERATION_WARNING};
pub use repo::comment_repo::{CommentRepository, SqliteCommentRepository};
pub use repo::news_repo::{NewNews, NewsRepository, SqliteNewsRepository};
pub use repo::note_repo::{NewNote, NoteRepository, SqliteNoteRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::comment_service::CommentService;
pub use service::news_service::{NewsDetail, NewsService};
pub use service::note_service::NoteService;
pub use service::ServiceError;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
