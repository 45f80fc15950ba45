use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::ApiError;
use crate::routes::parse_article_id;
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let articles = state
        .with_store(|store| store.list_articles())
        .await
        .map_err(|e| ApiError::internal("Failed to fetch articles", e))?;

    let html = state
        .pages
        .article_list(&articles)
        .map_err(|e| ApiError::internal("Failed to render page", e))?;
    Ok(Html(html))
}

pub async fn article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(id) = parse_article_id(&id) else {
        return not_found(&state);
    };

    let article = state
        .with_store(move |store| store.get_article(id))
        .await
        .map_err(|e| ApiError::internal("Failed to fetch article", e))?;

    match article {
        Some(article) => {
            let html = state
                .pages
                .article_detail(&article)
                .map_err(|e| ApiError::internal("Failed to render page", e))?;
            Ok(Html(html).into_response())
        }
        None => not_found(&state),
    }
}

fn not_found(state: &AppState) -> Result<Response, ApiError> {
    let html = state
        .pages
        .not_found()
        .map_err(|e| ApiError::internal("Failed to render page", e))?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
