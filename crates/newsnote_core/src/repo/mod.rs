//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity family.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Repositories return semantic errors (`NotFound`, `DuplicateSlug`) in
//!   addition to transport errors, and never panic on bad input.
//! - A storage-level uniqueness violation on `notes.slug` is translated to
//!   `DuplicateSlug` so concurrent creations fail the same way the slug
//!   assigner's advisory check would have.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod comment_repo;
pub mod news_repo;
pub mod note_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer error shared by all repositories.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Target row absent. Carries no identity on purpose.
    NotFound,
    /// Slug uniqueness violated; carries the colliding value.
    DuplicateSlug(String),
    /// Persisted state failed to parse back into a domain record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound => write!(f, "object not found"),
            Self::DuplicateSlug(value) => write!(f, "slug `{value}` is already in use"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Translates a `notes.slug` uniqueness violation into `DuplicateSlug`.
///
/// Any other error passes through unchanged. This is the authoritative
/// guard closing the check-then-insert race described in the slug module.
pub(crate) fn map_slug_violation(err: rusqlite::Error, slug: &str) -> RepoError {
    if let rusqlite::Error::SqliteFailure(code, Some(message)) = &err {
        if code.code == rusqlite::ErrorCode::ConstraintViolation && message.contains("notes.slug") {
            return RepoError::DuplicateSlug(slug.to_string());
        }
    }
    err.into()
}
