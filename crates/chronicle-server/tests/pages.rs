mod common;

use axum::http::{Method, StatusCode};

use common::{app_with, memory_store, send};

fn text(body: Vec<u8>) -> String {
    String::from_utf8(body).unwrap()
}

#[tokio::test]
async fn index_shows_empty_state() {
    let (app, _) = app_with(memory_store());

    let (status, body) = send(&app, Method::GET, "/").await;
    let html = text(body);
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Fresh perspectives, daily"));
    assert!(html.contains("No articles yet"));
}

#[tokio::test]
async fn index_lists_seeded_articles_with_links() {
    let (app, state) = app_with(memory_store());
    state.with_job(|job| job.initialize()).await.unwrap();

    let (status, body) = send(&app, Method::GET, "/").await;
    let html = text(body);
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Decoding the Mysteries of Dark Matter and Dark Energy"));
    assert!(html.contains("href=\"/article/1\""));
    assert!(html.contains("href=\"/article/3\""));
    assert!(html.contains("5 min read"));
    assert!(!html.contains("No articles yet"));
}

#[tokio::test]
async fn detail_page_renders_content_blocks() {
    let (app, state) = app_with(memory_store());
    state.with_job(|job| job.initialize()).await.unwrap();

    let (status, body) = send(&app, Method::GET, "/article/2").await;
    let html = text(body);
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Decoding the Mysteries of Dark Matter and Dark Energy</h1>"));
    assert!(html.contains("<h3>The Invisible Universe</h3>"));
    assert!(html.contains("<blockquote>We have discovered that approximately 68%"));
    assert!(!html.contains("## "));
}

#[tokio::test]
async fn detail_page_for_missing_article_is_404() {
    let (app, _) = app_with(memory_store());

    for uri in ["/article/42", "/article/not-a-number"] {
        let (status, body) = send(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(text(body).contains("Article not found"));
    }
}
