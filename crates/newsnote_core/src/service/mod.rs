//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate gate, slug assigner, moderation filter and repositories
//!   into the operations the web layer calls.
//! - Map every refusal into the shared error taxonomy below.
//!
//! # Invariants
//! - `NotFound` covers both "row absent" and "row owned by someone else";
//!   services never let a caller tell the two apart.
//! - `ModerationRejected` renders one fixed warning; the matched term
//!   never crosses the service boundary.

use crate::auth::{Access, Principal};
use crate::model::user::UserId;
use crate::moderation::MODERATION_WARNING;
use crate::repo::RepoError;
use crate::slug::SlugError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod comment_service;
pub mod news_service;
pub mod note_service;

/// Operation outcome taxonomy exposed to the web layer.
#[derive(Debug)]
pub enum ServiceError {
    /// Object absent or present-but-unauthorized; intentionally merged.
    NotFound,
    /// The operation requires a principal and none is present. The web
    /// layer should demand authentication and replay the operation.
    Unauthenticated,
    /// Slug collision; carries the colliding value for message formatting.
    DuplicateSlug(String),
    /// Comment text failed moderation. Displays the fixed warning only.
    ModerationRejected,
    /// Persistence-layer failure not covered by the cases above.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "object not found"),
            Self::Unauthenticated => write!(f, "authentication required"),
            Self::DuplicateSlug(value) => write!(f, "slug `{value}` is already in use"),
            Self::ModerationRejected => write!(f, "{MODERATION_WARNING}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound => Self::NotFound,
            RepoError::DuplicateSlug(slug) => Self::DuplicateSlug(slug),
            other => Self::Repo(other),
        }
    }
}

impl From<SlugError> for ServiceError {
    fn from(value: SlugError) -> Self {
        match value {
            SlugError::Duplicate(slug) => Self::DuplicateSlug(slug),
        }
    }
}

/// Converts a gate decision into the service error it must surface.
pub(crate) fn require(access: Access) -> Result<(), ServiceError> {
    match access {
        Access::Granted => Ok(()),
        Access::DeniedNotFound => Err(ServiceError::NotFound),
        Access::DeniedUnauthenticated => Err(ServiceError::Unauthenticated),
    }
}

/// Extracts the user id of an authenticated principal, mirroring the
/// login-required guard the web layer applies in front of owner-only
/// operations. Ordering matters: this fires before any row is fetched, so
/// an anonymous caller learns nothing about what exists.
pub(crate) fn require_user(principal: &Principal) -> Result<UserId, ServiceError> {
    principal.user_id().ok_or(ServiceError::Unauthenticated)
}
