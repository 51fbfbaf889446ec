//! User persistence.
//!
//! The identity collaborator owns authentication; this repository only
//! keeps the rows that note/comment ownership references point at. Used by
//! seeding paths and tests.

use crate::model::user::{User, UserId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection};
use uuid::Uuid;

/// Repository interface for user rows.
pub trait UserRepository {
    /// Registers a user and returns the persisted record.
    fn create_user(&self, username: &str) -> RepoResult<User>;
    /// Gets one user by id.
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, username: &str) -> RepoResult<User> {
        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO users (id, username) VALUES (?1, ?2);",
            params![id.to_string(), username],
        )?;

        Ok(User {
            id,
            username: username.to_string(),
        })
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, username FROM users WHERE id = ?1;")?;
        let mut rows = stmt.query([id.to_string()])?;

        if let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            return Ok(Some(User {
                id: parse_user_id(&id_text, "users.id")?,
                username: row.get("username")?,
            }));
        }

        Ok(None)
    }
}

pub(crate) fn parse_user_id(value: &str, column: &str) -> RepoResult<UserId> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}
