//! Router tests: requests go through the full axum stack against a temp data file.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use planejaqui_core::persistence::codec;
use planejaqui_core::{Category, Draft, Item};
use planejaqui_server::{create_router, AppState, ServerConfig};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

fn setup() -> (TempDir, ServerConfig, Router) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = ServerConfig {
        data_file: dir.path().join("data.json"),
        ..ServerConfig::default()
    };
    let state = Arc::new(AppState::from_config(&config));
    let router = create_router(state, &config);
    (dir, config, router)
}

fn sample() -> Vec<Item> {
    vec![
        Item::from_draft(Draft::new("Sofá", Category::LivingRoom, 1200.0).unwrap()),
        Item::from_draft(Draft::new("Panela", Category::Kitchen, 0.0).unwrap()),
    ]
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn save_request(body: impl Into<Body>) -> Request<Body> {
    Request::post("/api/save-data")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_load_before_any_save_is_empty() {
    let (_dir, _config, router) = setup();
    let (status, body) = send(&router, get("/api/data")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_save_then_load() {
    let (_dir, config, router) = setup();
    let items = sample();

    let (status, body) = send(&router, save_request(codec::encode_items(&items).unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Dados salvos com sucesso!");

    let on_disk = std::fs::read_to_string(&config.data_file).unwrap();
    assert_eq!(codec::decode_items(&on_disk).unwrap(), items);

    for uri in ["/api/data", "/data.json"] {
        let (status, body) = send(&router, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        let loaded: Vec<Item> = serde_json::from_value(body).unwrap();
        assert_eq!(loaded, items);
    }
}

#[tokio::test]
async fn test_save_replaces_previous_collection() {
    let (_dir, _config, router) = setup();
    send(&router, save_request(codec::encode_items(&sample()).unwrap())).await;
    send(&router, save_request("[]")).await;

    let (_, body) = send(&router, get("/api/data")).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_rejects_unknown_category() {
    let (_dir, config, router) = setup();
    let body = r#"[{"id":"a","name":"Carro","price":1,"category":"Garagem","createdAt":"2024-01-01T00:00:00Z"}]"#;

    let (status, response) = send(&router, save_request(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().contains("invalid collection"));
    assert!(!config.data_file.exists());
}

#[tokio::test]
async fn test_rejects_non_array_body() {
    let (_dir, _config, router) = setup();
    let (status, response) = send(&router, save_request(r#"{"items": []}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
}

#[tokio::test]
async fn test_blank_body_keeps_stored_collection() {
    let (_dir, config, router) = setup();
    let items = sample();
    send(&router, save_request(codec::encode_items(&items).unwrap())).await;
    let before = std::fs::read_to_string(&config.data_file).unwrap();

    for blank in ["", "   ", "\n"] {
        let (status, response) = send(&router, save_request(blank)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], false);
    }

    assert_eq!(std::fs::read_to_string(&config.data_file).unwrap(), before);
    let (_, body) = send(&router, get("/api/data")).await;
    let loaded: Vec<Item> = serde_json::from_value(body).unwrap();
    assert_eq!(loaded, items);
}

#[tokio::test]
async fn test_corrupt_data_file_is_server_error() {
    let (_dir, config, router) = setup();
    std::fs::write(&config.data_file, "not json").unwrap();

    let (status, response) = send(&router, get("/api/data")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["success"], false);
}

#[tokio::test]
async fn test_health() {
    let (_dir, _config, router) = setup();
    let (status, body) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
