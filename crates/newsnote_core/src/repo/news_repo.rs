//! News persistence.
//!
//! News rows are inserted by the seeding path and read by everyone; there
//! is no update path in this core.

use crate::model::news::{News, NewsId};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

const NEWS_SELECT_SQL: &str = "SELECT id, title, body, date FROM news";

/// Insert payload for a news article.
#[derive(Debug, Clone, Copy)]
pub struct NewNews<'a> {
    pub title: &'a str,
    pub text: &'a str,
    /// ISO-8601 `YYYY-MM-DD`; `None` lets storage default to today.
    pub date: Option<&'a str>,
}

/// Repository interface for news rows.
pub trait NewsRepository {
    /// Inserts one article and returns the persisted record, including the
    /// storage-applied default date.
    fn insert_news(&self, news: &NewNews<'_>) -> RepoResult<News>;
    /// Gets one article by id.
    fn get_news(&self, id: NewsId) -> RepoResult<Option<News>>;
    /// Lists the most recent articles, newest publication date first, ties
    /// broken by rowid descending.
    fn list_recent_news(&self, limit: u32) -> RepoResult<Vec<News>>;
}

/// SQLite-backed news repository.
pub struct SqliteNewsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNewsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NewsRepository for SqliteNewsRepository<'_> {
    fn insert_news(&self, news: &NewNews<'_>) -> RepoResult<News> {
        match news.date {
            Some(date) => self.conn.execute(
                "INSERT INTO news (title, body, date) VALUES (?1, ?2, ?3);",
                params![news.title, news.text, date],
            )?,
            None => self.conn.execute(
                "INSERT INTO news (title, body) VALUES (?1, ?2);",
                params![news.title, news.text],
            )?,
        };

        let id = self.conn.last_insert_rowid();
        let date: String = self
            .conn
            .query_row("SELECT date FROM news WHERE id = ?1;", [id], |row| {
                row.get(0)
            })?;

        Ok(News {
            id,
            title: news.title.to_string(),
            text: news.text.to_string(),
            date,
        })
    }

    fn get_news(&self, id: NewsId) -> RepoResult<Option<News>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NEWS_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_news_row(row)?));
        }

        Ok(None)
    }

    fn list_recent_news(&self, limit: u32) -> RepoResult<Vec<News>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NEWS_SELECT_SQL} ORDER BY date DESC, id DESC LIMIT ?1;"
        ))?;
        let mut rows = stmt.query([i64::from(limit)])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_news_row(row)?);
        }

        Ok(items)
    }
}

fn parse_news_row(row: &Row<'_>) -> RepoResult<News> {
    Ok(News {
        id: row.get("id")?,
        title: row.get("title")?,
        text: row.get("body")?,
        date: row.get("date")?,
    })
}
