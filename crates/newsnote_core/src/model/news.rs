//! Public news article record.
//!
//! News rows are written once by the seeding path and never edited by this
//! core; everyone may read them.

use serde::{Deserialize, Serialize};

/// Storage rowid of a news article.
pub type NewsId = i64;

/// Publicly readable article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: NewsId,
    pub title: String,
    pub text: String,
    /// Publication date as ISO-8601 `YYYY-MM-DD`; lexicographic order is
    /// chronological order. Defaults to the creation date.
    pub date: String,
}
