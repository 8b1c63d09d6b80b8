//! File store persistence tests
//!
//! The API is driven against the JSON-file backend, then the store is
//! reopened to prove inserts survive a restart.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use fitlog::api::ApiServer;
use fitlog::config::AppConfig;
use fitlog::store::{ExerciseStore, FileStore, LogQuery};

async fn post_form(server: ApiServer, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_users_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = Arc::new(FileStore::open(&path).unwrap());
    let server = ApiServer::new(AppConfig::default(), store);

    let (status, body) = post_form(server, "/api/users", "username=alice").await;
    assert_eq!(status, StatusCode::OK);
    let id: uuid::Uuid = body["_id"].as_str().unwrap().parse().unwrap();

    // A fresh open of the same file sees the user.
    let reopened = FileStore::open(&path).unwrap();
    let user = reopened.find_user(id).await.unwrap().unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_exercises_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = Arc::new(FileStore::open(&path).unwrap());
    let user = store.insert_user("alice").await.unwrap();

    let server = ApiServer::new(AppConfig::default(), store);
    let (status, _) = post_form(
        server,
        &format!("/api/users/{}/exercises", user.id),
        "description=run&duration=30&date=2023-01-15",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let reopened = FileStore::open(&path).unwrap();
    let log = reopened
        .find_exercises(&LogQuery::for_user(user.id))
        .await
        .unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].description, "run");
    assert_eq!(log[0].duration, 30);
}
