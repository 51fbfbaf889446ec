//! News listing and detail service.
//!
//! # Responsibility
//! - Produce the home feed: the configured number of most recent articles.
//! - Produce the detail view: one article plus its full comment thread.
//!
//! # Invariants
//! - Feed ordering is `date DESC, id DESC`; thread ordering is
//!   `created ASC, id ASC`. The two are deliberately opposite.
//! - The comment form is offered to authenticated principals only;
//!   anonymous detail views carry no form reference.

use crate::auth::Principal;
use crate::config::CoreConfig;
use crate::model::comment::Comment;
use crate::model::news::{News, NewsId};
use crate::repo::comment_repo::CommentRepository;
use crate::repo::news_repo::{NewNews, NewsRepository};
use crate::service::ServiceError;
use log::info;

/// Detail view of one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDetail {
    pub news: News,
    /// Full thread, oldest comment first.
    pub comments: Vec<Comment>,
    /// Whether the rendering layer should offer the comment form.
    pub can_comment: bool,
}

/// News service facade over news and comment repositories.
pub struct NewsService<N: NewsRepository, C: CommentRepository> {
    news: N,
    comments: C,
    page_size: u32,
}

impl<N: NewsRepository, C: CommentRepository> NewsService<N, C> {
    /// Creates a service using the page size fixed in `config`.
    pub fn new(news: N, comments: C, config: &CoreConfig) -> Self {
        Self {
            news,
            comments,
            page_size: config.news_page_size,
        }
    }

    /// Returns the home feed: at most one page of the most recent articles.
    /// Excess items are simply omitted.
    pub fn list_news(&self) -> Result<Vec<News>, ServiceError> {
        let items = self.news.list_recent_news(self.page_size)?;
        info!(
            "event=news_list module=service status=ok returned={}",
            items.len()
        );
        Ok(items)
    }

    /// Returns one article with its comment thread. Public read; the
    /// principal only decides comment form visibility.
    pub fn get_news(
        &self,
        principal: &Principal,
        id: NewsId,
    ) -> Result<NewsDetail, ServiceError> {
        let news = self.news.get_news(id)?.ok_or(ServiceError::NotFound)?;
        let comments = self.comments.list_comments_for_news(id)?;

        Ok(NewsDetail {
            news,
            comments,
            can_comment: principal.is_authenticated(),
        })
    }

    /// Inserts one article. This is the seeding path used by the embedding
    /// process; the core itself never edits news.
    pub fn seed_news(
        &self,
        title: &str,
        text: &str,
        date: Option<&str>,
    ) -> Result<News, ServiceError> {
        let news = self.news.insert_news(&NewNews { title, text, date })?;
        info!(
            "event=news_seed module=service status=ok news_id={} date={}",
            news.id, news.date
        );
        Ok(news)
    }
}
