//! Comment use-case service.
//!
//! # Responsibility
//! - Moderated comment writes against existing news articles.
//! - Owner-only edit/delete with the same non-disclosure policy as notes.
//!
//! # Invariants
//! - Every comment write (create and edit) passes the moderation filter
//!   before reaching storage.
//! - Create checks article existence first, then authentication, then
//!   moderation, so a rejected comment never persists partially.

use crate::auth::{authorize, Intent, Principal};
use crate::model::comment::{Comment, CommentId};
use crate::model::news::NewsId;
use crate::moderation::{ModerationFilter, Verdict};
use crate::repo::comment_repo::CommentRepository;
use crate::repo::news_repo::NewsRepository;
use crate::service::{require, require_user, ServiceError};
use log::info;

/// Comment service facade over comment and news repositories.
pub struct CommentService<C: CommentRepository, N: NewsRepository> {
    comments: C,
    news: N,
    filter: ModerationFilter,
}

impl<C: CommentRepository, N: NewsRepository> CommentService<C, N> {
    /// Creates a service over the given repositories and moderation filter.
    pub fn new(comments: C, news: N, filter: ModerationFilter) -> Self {
        Self {
            comments,
            news,
            filter,
        }
    }

    /// Creates one comment under an existing article.
    pub fn create_comment(
        &self,
        principal: &Principal,
        news_id: NewsId,
        text: &str,
    ) -> Result<Comment, ServiceError> {
        if self.news.get_news(news_id)?.is_none() {
            return Err(ServiceError::NotFound);
        }
        require(authorize(principal, None, Intent::Create))?;
        let author = require_user(principal)?;
        self.moderate(text)?;

        let comment = self.comments.insert_comment(news_id, author, text)?;

        info!(
            "event=comment_create module=service status=ok comment_id={} news_id={}",
            comment.id, news_id
        );
        Ok(comment)
    }

    /// Replaces the text of one comment; author only.
    pub fn update_comment(
        &self,
        principal: &Principal,
        id: CommentId,
        text: &str,
    ) -> Result<Comment, ServiceError> {
        require_user(principal)?;

        let comment = self
            .comments
            .get_comment(id)?
            .ok_or(ServiceError::NotFound)?;
        require(authorize(principal, Some(comment.author), Intent::Update))?;
        self.moderate(text)?;

        self.comments.update_comment_text(id, text)?;

        info!("event=comment_update module=service status=ok comment_id={id}");
        Ok(Comment {
            text: text.to_string(),
            ..comment
        })
    }

    /// Deletes one comment; author only.
    pub fn delete_comment(&self, principal: &Principal, id: CommentId) -> Result<(), ServiceError> {
        require_user(principal)?;

        let comment = self
            .comments
            .get_comment(id)?
            .ok_or(ServiceError::NotFound)?;
        require(authorize(principal, Some(comment.author), Intent::Delete))?;

        self.comments.delete_comment(id)?;

        info!("event=comment_delete module=service status=ok comment_id={id}");
        Ok(())
    }

    /// Lists the full thread of one article, oldest first. Public.
    pub fn list_comments(&self, news_id: NewsId) -> Result<Vec<Comment>, ServiceError> {
        let comments = self.comments.list_comments_for_news(news_id)?;
        Ok(comments)
    }

    fn moderate(&self, text: &str) -> Result<(), ServiceError> {
        match self.filter.check(text) {
            Verdict::Pass => Ok(()),
            Verdict::Reject { .. } => {
                // The matched term stays inside the core.
                info!("event=moderation_reject module=service status=denied");
                Err(ServiceError::ModerationRejected)
            }
        }
    }
}
