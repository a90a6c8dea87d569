use std::collections::HashSet;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use feedback_server::{api::app_router, build_state, config::Config};

fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["http://localhost:5173".to_string()],
        webhook_url: None,
        request_timeout: Duration::from_millis(30_000),
    }
}

fn test_app(dir: &TempDir) -> Router {
    let config = test_config(dir);
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

fn post_feedback(name: &str, message: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/feedback")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "name": name, "message": message }).to_string(),
        ))
        .unwrap()
}

fn list_request() -> Request<Body> {
    Request::builder()
        .uri("/api/feedback")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .clone()
        .oneshot(post_feedback("Ada", "Works well"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["message"], "Works well");
    assert!(created["id"].as_i64().is_some());
    assert!(created["createdAt"].as_str().unwrap().ends_with('Z'));
    assert!(created["sentiment"].is_null());
    assert!(created["summary"].is_null());

    let response = app.oneshot(list_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items = body_json(response).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], created["id"]);
}

#[tokio::test]
async fn create_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let long_name = "x".repeat(51);
    let long_message = "x".repeat(501);
    let cases: Vec<(&str, &str)> = vec![
        ("", "valid message"),
        ("   ", "valid message"),
        (long_name.as_str(), "valid message"),
        ("Ada", ""),
        ("Ada", "   "),
        ("Ada", long_message.as_str()),
    ];

    for (name, message) in cases {
        let response = app
            .clone()
            .oneshot(post_feedback(name, message))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
    }

    // No record was stored for any rejected request
    let response = app.oneshot(list_request()).await.unwrap();
    let items = body_json(response).await;
    assert!(items.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn listing_orders_newest_first() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    for i in 0..3 {
        let response = app
            .clone()
            .oneshot(post_feedback("Ada", &format!("message {}", i)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(list_request()).await.unwrap();
    let items = body_json(response).await;
    let items = items.as_array().unwrap().clone();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["message"], "message 2");
    assert_eq!(items[2]["message"], "message 0");
}

#[tokio::test]
async fn disabled_enrichment_leaves_fields_absent() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .clone()
        .oneshot(post_feedback("Ada", "Works well"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Give a hypothetical background task time to run before checking
    tokio::time::sleep(Duration::from_millis(200)).await;

    let response = app.oneshot(list_request()).await.unwrap();
    let items = body_json(response).await;
    assert!(items[0]["sentiment"].is_null());
    assert!(items[0]["summary"].is_null());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_each_get_a_unique_id() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let mut handles = Vec::new();
    for i in 0..50 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let response = app
                .oneshot(post_feedback("Ada", &format!("message {}", i)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value: Value = serde_json::from_slice(&body).unwrap();
            value["id"].as_i64().unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), 50);

    let response = app.oneshot(list_request()).await.unwrap();
    let items = body_json(response).await;
    let listed: HashSet<i64> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids);
}
