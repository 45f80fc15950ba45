use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;
use crate::routes;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(routes::pages::index))
        .route("/article/{id}", get(routes::pages::article))
        // Health
        .route("/health", get(routes::health::health_check))
        // JSON API
        .route("/api/articles", get(routes::articles::list_articles))
        .route(
            "/api/articles/generate",
            post(routes::articles::generate_article).get(routes::articles::invalid_article_id),
        )
        .route("/api/articles/{id}", get(routes::articles::get_article))
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .layer(cors)
        .with_state(state)
}
