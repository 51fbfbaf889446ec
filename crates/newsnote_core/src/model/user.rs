//! User record backing the ownership relation.
//!
//! Authentication itself lives outside this core; the `users` table exists
//! so that note/comment author references stay valid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque principal identifier issued at registration time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Minimal persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable opaque id used in every ownership check.
    pub id: UserId,
    /// Display name. Unique, but carries no authorization meaning.
    pub username: String,
}
