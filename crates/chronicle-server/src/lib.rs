//! chronicle-server
//!
//! HTTP front end for Chronicle: the JSON article API, the rendered list
//! and detail pages, startup seeding and the daily article schedule.

use std::sync::Arc;

use eyre::WrapErr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use chronicle_content::{ContentSource, TemplateLibrary};
use chronicle_storage::{ArticleStore, SqliteArticleStore};

pub mod config;
pub mod error;
pub mod jobs;
pub mod logging;
pub mod middleware;
pub mod render;
pub mod router;
pub mod routes;
pub mod state;

use config::{Config, DatabaseLocation};
use state::AppState;

/// Open the store, seed it, arm the scheduler and serve until shutdown.
pub async fn run(config: Config) -> eyre::Result<()> {
    let store: Arc<dyn ArticleStore> = Arc::new(open_store(&config.database)?);
    let source: Arc<dyn ContentSource> = Arc::new(TemplateLibrary::new());
    let state = AppState::new(store, source)?;

    state
        .with_job(|job| job.initialize())
        .await
        .wrap_err("failed to initialize articles")?;

    let scheduler = jobs::spawn_daily(Arc::clone(&state.job), config.daily_at);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .wrap_err_with(|| format!("failed to bind {address}"))?;
    info!(address = %address, "server listening");

    let served = axum::serve(listener, router::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    scheduler.abort();
    info!("server shut down");

    served.wrap_err("server error")
}

fn open_store(location: &DatabaseLocation) -> eyre::Result<SqliteArticleStore> {
    let store = match location {
        DatabaseLocation::File(path) => SqliteArticleStore::open(path)
            .wrap_err_with(|| format!("failed to open database {}", path.display()))?,
        DatabaseLocation::Memory => {
            SqliteArticleStore::open_in_memory().wrap_err("failed to open in-memory database")?
        }
    };
    Ok(store)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
