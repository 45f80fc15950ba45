//! Article persistence.
//!
//! Articles are append-only: the store can create, list, fetch and count
//! them but never updates or deletes a row. Reads reject rows that no
//! longer map onto the domain types instead of masking them.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Row, params};

use chronicle_core::models::article::{Article, NewArticle};
use chronicle_core::models::topic::Topic;

use crate::db;
use crate::error::StorageError;

const ARTICLE_SELECT_SQL: &str = "SELECT
    id,
    title,
    excerpt,
    content,
    topic,
    reading_time,
    created_at
FROM articles";

/// Persistence contract for articles.
pub trait ArticleStore: Send + Sync {
    /// All articles in insertion order.
    fn list_articles(&self) -> Result<Vec<Article>, StorageError>;

    fn get_article(&self, id: i64) -> Result<Option<Article>, StorageError>;

    fn count_articles(&self) -> Result<u64, StorageError>;

    /// Persist `article`, letting the store assign `id` and `created_at`,
    /// and return the full record.
    fn create_article(&self, article: &NewArticle) -> Result<Article, StorageError>;
}

/// SQLite-backed [`ArticleStore`]. One connection, serialized by a mutex.
pub struct SqliteArticleStore {
    conn: Mutex<Connection>,
}

impl SqliteArticleStore {
    /// Wrap a connection that already has migrations applied.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(Self::new(db::open_db(path)?))
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self::new(db::open_db_in_memory()?))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl ArticleStore for SqliteArticleStore {
    fn list_articles(&self) -> Result<Vec<Article>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{ARTICLE_SELECT_SQL} ORDER BY id ASC"))?;
        let rows = stmt.query_map([], ArticleRow::from_row)?;

        let mut articles = Vec::new();
        for row in rows {
            articles.push(row?.into_article()?);
        }
        Ok(articles)
    }

    fn get_article(&self, id: i64) -> Result<Option<Article>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{ARTICLE_SELECT_SQL} WHERE id = ?1"))?;
        let mut rows = stmt.query_map([id], ArticleRow::from_row)?;

        match rows.next() {
            Some(row) => Ok(Some(row?.into_article()?)),
            None => Ok(None),
        }
    }

    fn count_articles(&self) -> Result<u64, StorageError> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM articles", [], |row| {
            row.get::<_, i64>(0)
        })?;
        u64::try_from(count).map_err(|_| StorageError::InvalidData(format!("negative count {count}")))
    }

    fn create_article(&self, article: &NewArticle) -> Result<Article, StorageError> {
        let conn = self.conn()?;
        let row = conn.query_row(
            "INSERT INTO articles (
                title,
                excerpt,
                content,
                topic,
                reading_time
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, title, excerpt, content, topic, reading_time, created_at",
            params![
                article.title,
                article.excerpt,
                article.content,
                article.topic.as_str(),
                article.reading_time,
            ],
            ArticleRow::from_row,
        )?;

        row.into_article()
    }
}

/// Raw column values, converted to an [`Article`] outside the rusqlite
/// row callback so domain errors keep their own type.
struct ArticleRow {
    id: i64,
    title: String,
    excerpt: String,
    content: String,
    topic: String,
    reading_time: u32,
    created_at: String,
}

impl ArticleRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            excerpt: row.get(2)?,
            content: row.get(3)?,
            topic: row.get(4)?,
            reading_time: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_article(self) -> Result<Article, StorageError> {
        let topic: Topic = self
            .topic
            .parse()
            .map_err(|e| StorageError::InvalidData(format!("article {}: {e}", self.id)))?;
        let created_at: jiff::Timestamp = self.created_at.parse().map_err(|e| {
            StorageError::InvalidData(format!(
                "article {}: bad created_at {:?}: {e}",
                self.id, self.created_at
            ))
        })?;

        Ok(Article {
            id: self.id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            topic,
            reading_time: self.reading_time,
            created_at,
        })
    }
}
