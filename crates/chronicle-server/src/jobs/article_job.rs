use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, info};

use chronicle_content::ContentSource;
use chronicle_core::models::article::Article;
use chronicle_storage::{ArticleStore, StorageError};

/// Result of [`ArticleJob::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// This job already completed initialization; nothing was read.
    AlreadyInitialized,
    /// The store had articles, so no seed was inserted.
    Skipped { existing: u64 },
    /// The store was empty and this many seed articles were inserted.
    Seeded(usize),
}

/// Creates articles from a [`ContentSource`] into an [`ArticleStore`].
///
/// Shared by the startup seed, the daily schedule and the on-demand
/// endpoint. All methods block on the store and belong on a blocking
/// thread when called from async code.
pub struct ArticleJob {
    store: Arc<dyn ArticleStore>,
    source: Arc<dyn ContentSource>,
    initialized: AtomicBool,
}

impl ArticleJob {
    pub fn new(store: Arc<dyn ArticleStore>, source: Arc<dyn ContentSource>) -> Self {
        Self {
            store,
            source,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Seed the store with the source's initial batch if it is empty.
    ///
    /// Runs at most once per job. A failed insertion is returned and leaves
    /// the job uninitialized so the caller may try again; rows inserted
    /// before the failure stay.
    pub fn initialize(&self) -> Result<InitOutcome, StorageError> {
        if self.is_initialized() {
            info!("articles already initialized, skipping");
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let outcome = self
            .seed_if_empty()
            .inspect_err(|e| error!(error = %e, "failed to initialize articles"))?;

        self.initialized.store(true, Ordering::Release);
        Ok(outcome)
    }

    fn seed_if_empty(&self) -> Result<InitOutcome, StorageError> {
        let count = self.store.count_articles()?;
        info!(count, "current article count");

        if count > 0 {
            info!("articles already exist, skipping initialization");
            return Ok(InitOutcome::Skipped { existing: count });
        }

        info!("no articles found, inserting initial batch");
        let batch = self.source.initial_batch();
        for article in &batch {
            let created = self.store.create_article(article)?;
            info!(article_id = created.id, title = %created.title, "created article");
        }

        info!(count = batch.len(), "initial articles created");
        Ok(InitOutcome::Seeded(batch.len()))
    }

    /// Produce one article and persist it.
    pub fn generate_article(&self) -> Result<Article, StorageError> {
        let article = self.source.produce();
        self.store.create_article(&article)
    }

    /// Scheduled variant of [`generate_article`](Self::generate_article):
    /// failures are logged and swallowed.
    pub fn generate_daily(&self) -> Option<Article> {
        info!("generating daily article");
        match self.generate_article() {
            Ok(article) => {
                info!(article_id = article.id, title = %article.title, "daily article created");
                Some(article)
            }
            Err(e) => {
                error!(error = %e, "failed to generate daily article");
                None
            }
        }
    }
}
