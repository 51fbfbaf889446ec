//! Note persistence.
//!
//! # Responsibility
//! - CRUD over note rows, addressed by slug externally and rowid
//!   internally.
//! - Enforce slug uniqueness at the storage layer and surface violations as
//!   `DuplicateSlug`.
//!
//! # Invariants
//! - `author_id` is written once at insert and never updated.
//! - `list_notes_by_author` is the only listing path; there is no query
//!   that returns another owner's rows.

use crate::model::note::{Note, NoteId};
use crate::model::user::UserId;
use crate::repo::user_repo::parse_user_id;
use crate::repo::{map_slug_violation, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use std::collections::HashSet;

const NOTE_SELECT_SQL: &str = "SELECT id, title, body, slug, author_id FROM notes";

/// Insert payload for a note. The slug has already been assigned.
#[derive(Debug, Clone, Copy)]
pub struct NewNote<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub slug: &'a str,
    pub author: UserId,
}

/// Repository interface for note rows.
pub trait NoteRepository {
    /// Inserts one note and returns the persisted record.
    fn insert_note(&self, note: &NewNote<'_>) -> RepoResult<Note>;
    /// Gets one note by slug, regardless of owner; authorization is the
    /// caller's concern.
    fn get_note_by_slug(&self, slug: &str) -> RepoResult<Option<Note>>;
    /// Replaces title, body and slug of one note.
    fn update_note(&self, id: NoteId, title: &str, text: &str, slug: &str) -> RepoResult<()>;
    /// Hard-deletes one note.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
    /// Lists all notes owned by `author`.
    fn list_notes_by_author(&self, author: UserId) -> RepoResult<Vec<Note>>;
    /// Returns every known slug, optionally excluding one note's own slug
    /// (used when re-assigning during update).
    fn slugs_excluding(&self, exclude: Option<NoteId>) -> RepoResult<HashSet<String>>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, note: &NewNote<'_>) -> RepoResult<Note> {
        self.conn
            .execute(
                "INSERT INTO notes (title, body, slug, author_id) VALUES (?1, ?2, ?3, ?4);",
                params![
                    note.title,
                    note.text,
                    note.slug,
                    note.author.to_string()
                ],
            )
            .map_err(|err| map_slug_violation(err, note.slug))?;

        Ok(Note {
            id: self.conn.last_insert_rowid(),
            title: note.title.to_string(),
            text: note.text.to_string(),
            slug: note.slug.to_string(),
            author: note.author,
        })
    }

    fn get_note_by_slug(&self, slug: &str) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE slug = ?1;"))?;
        let mut rows = stmt.query([slug])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn update_note(&self, id: NoteId, title: &str, text: &str, slug: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE notes SET title = ?2, body = ?3, slug = ?4 WHERE id = ?1;",
                params![id, title, text, slug],
            )
            .map_err(|err| map_slug_violation(err, slug))?;

        if changed == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    fn list_notes_by_author(&self, author: UserId) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} WHERE author_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([author.to_string()])?;
        let mut notes = Vec::new();

        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn slugs_excluding(&self, exclude: Option<NoteId>) -> RepoResult<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT slug FROM notes WHERE ?1 IS NULL OR id <> ?1;")?;
        let mut rows = stmt.query(params![exclude])?;
        let mut slugs = HashSet::new();

        while let Some(row) = rows.next()? {
            slugs.insert(row.get::<_, String>("slug")?);
        }

        Ok(slugs)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let author_text: String = row.get("author_id")?;
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        text: row.get("body")?,
        slug: row.get("slug")?,
        author: parse_user_id(&author_text, "notes.author_id")?,
    })
}
