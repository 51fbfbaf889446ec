//! Personal note record.
//!
//! # Invariants
//! - `slug` is unique across all notes; uniqueness is enforced by a storage
//!   constraint in addition to the advisory check in the slug assigner.
//! - `author` is fixed at creation and never reassigned.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Storage rowid of a note.
pub type NoteId = i64;

/// Private note owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
    /// Unique URL-safe identifier; external callers address notes by slug.
    pub slug: String,
    /// Owner. The only input to authorization decisions.
    pub author: UserId,
}
