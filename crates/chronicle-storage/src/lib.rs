//! chronicle-storage
//!
//! SQLite persistence for articles. Owns the schema, its migrations and
//! the [`articles::ArticleStore`] contract the rest of the system talks to.

pub mod articles;
pub mod db;
pub mod error;

pub use articles::{ArticleStore, SqliteArticleStore};
pub use error::StorageError;
