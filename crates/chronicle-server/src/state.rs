use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinError;

use chronicle_content::ContentSource;
use chronicle_storage::{ArticleStore, StorageError};

use crate::jobs::ArticleJob;
use crate::render::{Pages, RenderError};

/// Failure of a store or job call run on the blocking pool.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("blocking task failed: {0}")]
    Join(#[from] JoinError),
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    pub job: Arc<ArticleJob>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ArticleStore>,
        source: Arc<dyn ContentSource>,
    ) -> Result<Self, RenderError> {
        let job = Arc::new(ArticleJob::new(Arc::clone(&store), source));
        Ok(Self {
            store,
            job,
            pages: Arc::new(Pages::new()?),
        })
    }

    /// Run a store call on the blocking pool.
    pub async fn with_store<T, F>(&self, f: F) -> Result<T, TaskError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn ArticleStore) -> Result<T, StorageError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        blocking(move || f(store.as_ref())).await
    }

    /// Run an [`ArticleJob`] call on the blocking pool.
    pub async fn with_job<T, F>(&self, f: F) -> Result<T, TaskError>
    where
        T: Send + 'static,
        F: FnOnce(&ArticleJob) -> Result<T, StorageError> + Send + 'static,
    {
        let job = Arc::clone(&self.job);
        blocking(move || f(job.as_ref())).await
    }
}

/// SQLite calls block; keep them off the async workers.
pub async fn blocking<T, F>(f: F) -> Result<T, TaskError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}
