//! API endpoint integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sample_api::{api::routes::create_router, config::Settings, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> Router {
    create_router(Arc::new(AppState::new(Settings::default())))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_home_returns_welcome() {
    let (status, body) = get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Welcome to Flask API"}));
}

#[tokio::test]
async fn test_data_returns_three_items_in_order() {
    let (status, body) = get_json("/api/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0],
        json!({"id": 1, "name": "Item 1", "description": "First item"})
    );
    assert_eq!(
        items[1],
        json!({"id": 2, "name": "Item 2", "description": "Second item"})
    );
    assert_eq!(
        items[2],
        json!({"id": 3, "name": "Item 3", "description": "Third item"})
    );
}

#[tokio::test]
async fn test_data_is_identical_across_requests() {
    let (_, first) = get("/api/data").await;
    let (_, second) = get("/api/data").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_message_greets_world() {
    let (status, body) = get_json("/api/message/World").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "success", "message": "Hello, World!"})
    );
}

#[tokio::test]
async fn test_message_decodes_path_segment() {
    let (status, body) = get_json("/api/message/Jane%20Doe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, Jane Doe!");

    let (_, body) = get_json("/api/message/%C3%89mile").await;
    assert_eq!(body["message"], "Hello, \u{c9}mile!");
}

#[tokio::test]
async fn test_message_for_many_names() {
    for name in ["a", "Bob", "x-y_z", "12345", "O'Brien"] {
        let (status, body) = get_json(&format!("/api/message/{}", name)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "success", "message": format!("Hello, {}!", name)})
        );
    }
}

#[tokio::test]
async fn test_unknown_paths_are_not_found() {
    for uri in ["/missing", "/api", "/api/data/1", "/api/message", "/api/message/a/b"] {
        let (status, _) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_openapi_document() {
    let (status, body) = get_json("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Sample API");

    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/"));
    assert!(paths.contains_key("/api/data"));
    assert!(paths.contains_key("/api/message/{name}"));

    assert!(body.get("servers").is_none());
}

#[tokio::test]
async fn test_openapi_document_advertises_public_url() {
    let mut settings = Settings::default();
    settings.server.public_url = Some("https://api.example.com".to_string());
    let app = create_router(Arc::new(AppState::new(settings)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["servers"][0]["url"], "https://api.example.com");
}
