#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

use chronicle_content::{ContentSource, TemplateLibrary};
use chronicle_core::models::article::{Article, NewArticle};
use chronicle_server::router::router;
use chronicle_server::state::AppState;
use chronicle_storage::{ArticleStore, SqliteArticleStore, StorageError};

pub fn memory_store() -> Arc<SqliteArticleStore> {
    Arc::new(SqliteArticleStore::open_in_memory().unwrap())
}

pub fn templates() -> Arc<dyn ContentSource> {
    Arc::new(TemplateLibrary::new())
}

pub fn app_with(store: Arc<dyn ArticleStore>) -> (Router, AppState) {
    let state = AppState::new(store, templates()).unwrap();
    (router(state.clone()), state)
}

pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn send_json(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, method, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn outage() -> StorageError {
    StorageError::InvalidData("simulated outage".to_string())
}

/// Every call fails.
pub struct FailingStore;

impl ArticleStore for FailingStore {
    fn list_articles(&self) -> Result<Vec<Article>, StorageError> {
        Err(outage())
    }

    fn get_article(&self, _id: i64) -> Result<Option<Article>, StorageError> {
        Err(outage())
    }

    fn count_articles(&self) -> Result<u64, StorageError> {
        Err(outage())
    }

    fn create_article(&self, _article: &NewArticle) -> Result<Article, StorageError> {
        Err(outage())
    }
}

/// Delegates to an in-memory store but fails the `fail_on`-th create
/// (1-based), once.
pub struct FlakyStore {
    inner: SqliteArticleStore,
    fail_on: usize,
    creates: AtomicUsize,
}

impl FlakyStore {
    pub fn failing_create(fail_on: usize) -> Self {
        Self {
            inner: SqliteArticleStore::open_in_memory().unwrap(),
            fail_on,
            creates: AtomicUsize::new(0),
        }
    }
}

impl ArticleStore for FlakyStore {
    fn list_articles(&self) -> Result<Vec<Article>, StorageError> {
        self.inner.list_articles()
    }

    fn get_article(&self, id: i64) -> Result<Option<Article>, StorageError> {
        self.inner.get_article(id)
    }

    fn count_articles(&self) -> Result<u64, StorageError> {
        self.inner.count_articles()
    }

    fn create_article(&self, article: &NewArticle) -> Result<Article, StorageError> {
        let call = self.creates.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on {
            return Err(outage());
        }
        self.inner.create_article(article)
    }
}
