use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use chronicle_core::models::article::Article;

use crate::error::ApiError;
use crate::routes::parse_article_id;
use crate::state::AppState;

pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state
        .with_store(|store| store.list_articles())
        .await
        .map_err(|e| ApiError::internal("Failed to fetch articles", e))?;

    Ok(Json(articles))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let id = parse_article_id(&id)
        .ok_or_else(|| ApiError::BadRequest("Invalid article ID".to_string()))?;

    let article = state
        .with_store(move |store| store.get_article(id))
        .await
        .map_err(|e| ApiError::internal("Failed to fetch article", e))?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    Ok(Json(article))
}

/// `GET /api/articles/generate` is a lookup of the id "generate".
pub async fn invalid_article_id() -> ApiError {
    ApiError::BadRequest("Invalid article ID".to_string())
}

pub async fn generate_article(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    info!("generating new article on demand");

    let article = state
        .with_job(|job| job.generate_article())
        .await
        .map_err(|e| ApiError::internal("Failed to generate article", e))?;

    info!(article_id = article.id, title = %article.title, "created article");
    Ok((StatusCode::CREATED, Json(article)))
}
