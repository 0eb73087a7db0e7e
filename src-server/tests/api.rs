//! HTTP API tests
//!
//! Drive the router in-process against a JSON file in a temp directory.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use todo_server::api::create_router;
use todo_server::repository::JsonStore;
use todo_server::AppState;

struct TestApp {
    dir: tempfile::TempDir,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let state = AppState::new(JsonStore::new(dir.path().join("db.json")));
        Self { router: create_router(state, None), dir }
    }

    fn with_ui() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let dist = dir.path().join("dist");
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>todo</html>").unwrap();
        let state = AppState::new(JsonStore::new(dir.path().join("db.json")));
        Self { router: create_router(state, Some(&dist)), dir }
    }

    fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join("db.json")
    }

    async fn send(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn json(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).expect("response is not JSON"))
    }

    async fn list(&self) -> Value {
        let (status, body) = self.json("GET", "/api/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

const BUY_MILK: &str = r#"{"id":"1","text":"Buy milk","completed":false}"#;

#[tokio::test]
async fn first_list_creates_empty_store() {
    let app = TestApp::new();
    assert!(!app.db_path().exists());

    assert_eq!(app.list().await, json!([]));

    let on_disk: Value =
        serde_json::from_str(&std::fs::read_to_string(app.db_path()).unwrap()).unwrap();
    assert_eq!(on_disk, json!({ "todos": [] }));
}

#[tokio::test]
async fn create_then_list_returns_item() {
    let app = TestApp::new();

    let (status, body) = app.json("POST", "/api/todos", Some(BUY_MILK)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "1", "text": "Buy milk", "completed": false }));

    assert_eq!(
        app.list().await,
        json!([{ "id": "1", "text": "Buy milk", "completed": false }])
    );
}

#[tokio::test]
async fn create_without_id_assigns_one() {
    let app = TestApp::new();

    let (status, body) = app.json("POST", "/api/todos", Some(r#"{"text":"No id"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().expect("id assigned");
    assert!(!id.is_empty());
    assert_eq!(body["completed"], json!(false));

    assert_eq!(app.list().await[0]["id"], json!(id));
}

#[tokio::test]
async fn update_completed_keeps_other_fields() {
    let app = TestApp::new();
    app.send("POST", "/api/todos", Some(BUY_MILK)).await;

    let (status, body) = app.json("PUT", "/api/todos/1", Some(r#"{"completed":true}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "completed": true }));

    assert_eq!(
        app.list().await,
        json!([{ "id": "1", "text": "Buy milk", "completed": true }])
    );
}

#[tokio::test]
async fn update_text_only() {
    let app = TestApp::new();
    app.send("POST", "/api/todos", Some(BUY_MILK)).await;
    app.send("POST", "/api/todos", Some(r#"{"id":"2","text":"Walk dog","completed":true}"#))
        .await;

    let (status, _) = app.json("PUT", "/api/todos/2", Some(r#"{"text":"Walk cat"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        app.list().await,
        json!([
            { "id": "1", "text": "Buy milk", "completed": false },
            { "id": "2", "text": "Walk cat", "completed": true }
        ])
    );
}

#[tokio::test]
async fn update_missing_id_is_silent_noop() {
    let app = TestApp::new();
    app.send("POST", "/api/todos", Some(BUY_MILK)).await;

    let (status, body) = app
        .json("PUT", "/api/todos/404", Some(r#"{"text":"ghost","completed":true}"#))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": "ghost", "completed": true }));

    assert_eq!(
        app.list().await,
        json!([{ "id": "1", "text": "Buy milk", "completed": false }])
    );
}

#[tokio::test]
async fn delete_then_list_is_empty() {
    let app = TestApp::new();
    app.send("POST", "/api/todos", Some(BUY_MILK)).await;

    let (status, body) = app.json("DELETE", "/api/todos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    assert_eq!(app.list().await, json!([]));
}

#[tokio::test]
async fn delete_missing_id_succeeds() {
    let app = TestApp::new();
    app.send("POST", "/api/todos", Some(BUY_MILK)).await;

    let (status, body) = app.json("DELETE", "/api/todos/nope", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    assert_eq!(app.list().await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_body_is_500() {
    let app = TestApp::new();

    let (status, body) = app.json("POST", "/api/todos", Some("{ nope")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create todo" }));

    let (status, body) = app.json("PUT", "/api/todos/1", Some("[1,")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to update todo" }));
}

#[tokio::test]
async fn corrupt_store_maps_to_static_errors() {
    let app = TestApp::new();
    std::fs::write(app.db_path(), "not json at all").unwrap();

    let cases = [
        ("GET", "/api/todos", None, "Failed to fetch todos"),
        ("POST", "/api/todos", Some(BUY_MILK), "Failed to create todo"),
        ("PUT", "/api/todos/1", Some(r#"{"completed":true}"#), "Failed to update todo"),
        ("DELETE", "/api/todos/1", None, "Failed to delete todo"),
    ];
    for (method, uri, body, message) in cases {
        let (status, response) = app.json(method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(response, json!({ "error": message }));
    }

    // the corrupt file is never overwritten
    assert_eq!(std::fs::read_to_string(app.db_path()).unwrap(), "not json at all");
}

#[tokio::test]
async fn unknown_api_path_is_404() {
    let app = TestApp::with_ui();

    let (status, _) = app.send("GET", "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ui_routes_fall_back_to_index() {
    let app = TestApp::with_ui();

    for uri in ["/", "/todo/1"] {
        let (status, body) = app.send("GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, b"<html>todo</html>");
    }
}
