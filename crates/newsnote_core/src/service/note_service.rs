//! Note use-case service.
//!
//! # Responsibility
//! - Owner-only CRUD over notes, addressed by slug.
//! - Consult the ownership gate before every detail read and mutation, and
//!   the slug assigner before every write.
//!
//! # Invariants
//! - A non-owner outcome is byte-for-byte the outcome for a missing note.
//! - Slug re-assignment during update excludes the note's own current slug
//!   from the collision set.
//! - `list_my_notes` returns the caller's rows only; other owners' notes
//!   leak nothing, not even titles or slugs.

use crate::auth::{authorize, Intent, Principal};
use crate::model::note::Note;
use crate::repo::note_repo::{NewNote, NoteRepository};
use crate::service::{require, require_user, ServiceError};
use crate::slug;
use log::info;

/// Note service facade over a repository implementation.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note for the authenticated principal.
    ///
    /// An omitted or blank `requested_slug` derives the slug from `title`.
    pub fn create_note(
        &self,
        principal: &Principal,
        title: &str,
        text: &str,
        requested_slug: Option<&str>,
    ) -> Result<Note, ServiceError> {
        require(authorize(principal, None, Intent::Create))?;
        let author = require_user(principal)?;

        let existing = self.repo.slugs_excluding(None)?;
        let assigned = slug::assign(requested_slug, title, &existing)?;

        let note = self.repo.insert_note(&NewNote {
            title,
            text,
            slug: &assigned,
            author,
        })?;

        info!(
            "event=note_create module=service status=ok note_id={} slug={}",
            note.id, note.slug
        );
        Ok(note)
    }

    /// Gets one note by slug; owner only.
    pub fn get_note(&self, principal: &Principal, slug: &str) -> Result<Note, ServiceError> {
        require_user(principal)?;

        let note = self
            .repo
            .get_note_by_slug(slug)?
            .ok_or(ServiceError::NotFound)?;
        require(authorize(principal, Some(note.author), Intent::ReadDetail))?;

        Ok(note)
    }

    /// Replaces title, text and slug of one note; owner only.
    pub fn update_note(
        &self,
        principal: &Principal,
        current_slug: &str,
        title: &str,
        text: &str,
        requested_slug: Option<&str>,
    ) -> Result<Note, ServiceError> {
        require_user(principal)?;

        let note = self
            .repo
            .get_note_by_slug(current_slug)?
            .ok_or(ServiceError::NotFound)?;
        require(authorize(principal, Some(note.author), Intent::Update))?;

        // The note keeps its own slug without that counting as a collision.
        let existing = self.repo.slugs_excluding(Some(note.id))?;
        let assigned = slug::assign(requested_slug, title, &existing)?;

        self.repo.update_note(note.id, title, text, &assigned)?;

        info!(
            "event=note_update module=service status=ok note_id={} slug={}",
            note.id, assigned
        );
        Ok(Note {
            id: note.id,
            title: title.to_string(),
            text: text.to_string(),
            slug: assigned,
            author: note.author,
        })
    }

    /// Deletes one note; owner only.
    pub fn delete_note(&self, principal: &Principal, slug: &str) -> Result<(), ServiceError> {
        require_user(principal)?;

        let note = self
            .repo
            .get_note_by_slug(slug)?
            .ok_or(ServiceError::NotFound)?;
        require(authorize(principal, Some(note.author), Intent::Delete))?;

        self.repo.delete_note(note.id)?;

        info!(
            "event=note_delete module=service status=ok note_id={}",
            note.id
        );
        Ok(())
    }

    /// Lists the caller's own notes, and nothing else.
    pub fn list_my_notes(&self, principal: &Principal) -> Result<Vec<Note>, ServiceError> {
        let author = require_user(principal)?;
        let notes = self.repo.list_notes_by_author(author)?;
        Ok(notes)
    }
}
