//! Comment record attached to a news article.
//!
//! # Invariants
//! - `created` is assigned from the server clock at persistence time, never
//!   taken from the client; equal timestamps tie-break by rowid.
//! - `news` and `author` are immutable after creation.

use crate::model::news::NewsId;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Storage rowid of a comment.
pub type CommentId = i64;

/// Authenticated user's comment under a news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub news: NewsId,
    /// Owner. The only input to authorization decisions.
    pub author: UserId,
    pub text: String,
    /// Creation timestamp in epoch milliseconds.
    pub created: i64,
}
