//! Comment persistence.
//!
//! # Invariants
//! - `created` is assigned inside the INSERT from the server clock; client
//!   timestamps are never accepted.
//! - Thread listing is ordered `created ASC, id ASC`, the reverse of the
//!   news feed ordering.

use crate::model::comment::{Comment, CommentId};
use crate::model::news::NewsId;
use crate::model::user::UserId;
use crate::repo::user_repo::parse_user_id;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const COMMENT_SELECT_SQL: &str = "SELECT id, news_id, author_id, body, created FROM comments";

/// Repository interface for comment rows.
pub trait CommentRepository {
    /// Inserts one comment, stamping `created` from the server clock, and
    /// returns the persisted record.
    fn insert_comment(&self, news: NewsId, author: UserId, text: &str) -> RepoResult<Comment>;
    /// Gets one comment by id, regardless of owner; authorization is the
    /// caller's concern.
    fn get_comment(&self, id: CommentId) -> RepoResult<Option<Comment>>;
    /// Replaces the text of one comment.
    fn update_comment_text(&self, id: CommentId, text: &str) -> RepoResult<()>;
    /// Hard-deletes one comment.
    fn delete_comment(&self, id: CommentId) -> RepoResult<()>;
    /// Lists the full thread of one article, oldest first.
    fn list_comments_for_news(&self, news: NewsId) -> RepoResult<Vec<Comment>>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn insert_comment(&self, news: NewsId, author: UserId, text: &str) -> RepoResult<Comment> {
        self.conn.execute(
            "INSERT INTO comments (news_id, author_id, body, created)
             VALUES (?1, ?2, ?3, (strftime('%s', 'now') * 1000));",
            params![news, author.to_string(), text],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get_comment(id)?
            .ok_or(RepoError::InvalidData(
                "created comment not found in read-back".to_string(),
            ))
    }

    fn get_comment(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_comment_row(row)?));
        }

        Ok(None)
    }

    fn update_comment_text(&self, id: CommentId, text: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE comments SET body = ?2 WHERE id = ?1;",
            params![id, text],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    fn delete_comment(&self, id: CommentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM comments WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    fn list_comments_for_news(&self, news: NewsId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{COMMENT_SELECT_SQL} WHERE news_id = ?1 ORDER BY created ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([news])?;
        let mut comments = Vec::new();

        while let Some(row) = rows.next()? {
            comments.push(parse_comment_row(row)?);
        }

        Ok(comments)
    }
}

fn parse_comment_row(row: &Row<'_>) -> RepoResult<Comment> {
    let author_text: String = row.get("author_id")?;
    Ok(Comment {
        id: row.get("id")?,
        news: row.get("news_id")?,
        author: parse_user_id(&author_text, "comments.author_id")?,
        text: row.get("body")?,
        created: row.get("created")?,
    })
}
