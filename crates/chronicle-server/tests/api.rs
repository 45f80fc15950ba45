mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};

use chronicle_content::templates::TEMPLATES;
use chronicle_core::models::topic::Topic;
use chronicle_server::middleware::access_log::REQUEST_ID_HEADER;

use common::{FailingStore, app_with, memory_store, send, send_json};

const SEED_TITLES: [&str; 3] = [
    "The Rise of Quantum Computing: A New Era of Computation",
    "Decoding the Mysteries of Dark Matter and Dark Energy",
    "How Artificial Intelligence is Transforming Healthcare",
];

#[tokio::test]
async fn empty_store_lists_no_articles() {
    let (app, _) = app_with(memory_store());

    let (status, json) = send_json(&app, Method::GET, "/api/articles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn seeded_store_lists_initial_titles_in_order() {
    let (app, state) = app_with(memory_store());
    state.with_job(|job| job.initialize()).await.unwrap();

    let (status, json) = send_json(&app, Method::GET, "/api/articles").await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, SEED_TITLES);
}

#[tokio::test]
async fn every_listed_article_is_fetchable_by_id() {
    let (app, state) = app_with(memory_store());
    state.with_job(|job| job.initialize()).await.unwrap();

    let (_, list) = send_json(&app, Method::GET, "/api/articles").await;
    for listed in list.as_array().unwrap() {
        let uri = format!("/api/articles/{}", listed["id"]);
        let (status, fetched) = send_json(&app, Method::GET, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&fetched, listed);
    }
}

#[tokio::test]
async fn article_json_has_client_field_names() {
    let (app, state) = app_with(memory_store());
    state.with_job(|job| job.initialize()).await.unwrap();

    let (_, json) = send_json(&app, Method::GET, "/api/articles/1").await;
    for field in ["id", "title", "excerpt", "content", "topic", "readingTime", "createdAt"] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["readingTime"], 5);
    assert_eq!(json["topic"], "Technology");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let (app, _) = app_with(memory_store());

    for uri in [
        "/api/articles/abc",
        "/api/articles/1.5",
        "/api/articles/12abc",
        "/api/articles/generate",
    ] {
        let (status, json) = send_json(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["message"], "Invalid article ID");
    }
}

#[tokio::test]
async fn absent_id_is_not_found() {
    let (app, state) = app_with(memory_store());
    state.with_job(|job| job.initialize()).await.unwrap();

    let (status, json) = send_json(&app, Method::GET, "/api/articles/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Article not found");
}

#[tokio::test]
async fn generate_twice_creates_two_distinct_articles() {
    let (app, state) = app_with(memory_store());
    let template_topics: Vec<Topic> = TEMPLATES.iter().map(|t| t.topic).collect();

    let (first_status, first) = send_json(&app, Method::POST, "/api/articles/generate").await;
    let (second_status, second) = send_json(&app, Method::POST, "/api/articles/generate").await;

    assert_eq!(first_status, StatusCode::CREATED);
    assert_eq!(second_status, StatusCode::CREATED);
    assert_ne!(first["id"], second["id"]);

    for created in [&first, &second] {
        let topic: Topic = created["topic"].as_str().unwrap().parse().unwrap();
        assert!(template_topics.contains(&topic));
        assert!(created["createdAt"].is_string());
    }

    let count = state.with_store(|store| store.count_articles()).await.unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn generated_article_appears_in_listing() {
    let (app, _) = app_with(memory_store());

    let (_, created) = send_json(&app, Method::POST, "/api/articles/generate").await;
    let (_, list) = send_json(&app, Method::GET, "/api/articles").await;

    assert_eq!(list.as_array().unwrap(), &vec![created]);
}

#[tokio::test]
async fn store_failures_map_to_generic_500() {
    let (app, _) = app_with(Arc::new(FailingStore));

    let cases = [
        (Method::GET, "/api/articles", "Failed to fetch articles"),
        (Method::GET, "/api/articles/1", "Failed to fetch article"),
        (Method::POST, "/api/articles/generate", "Failed to generate article"),
    ];

    for (method, uri, message) in cases {
        let (status, json) = send_json(&app, method, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(json["message"], message);
        assert!(!json.to_string().contains("simulated outage"));
    }
}

#[tokio::test]
async fn malformed_id_is_rejected_before_touching_the_store() {
    let (app, _) = app_with(Arc::new(FailingStore));

    let (status, _) = send_json(&app, Method::GET, "/api/articles/nope").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app_with(memory_store());

    let (status, json) = send_json(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (app, _) = app_with(memory_store());

    let request = axum::http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
    assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _) = app_with(memory_store());

    let (status, _) = send(&app, Method::GET, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
