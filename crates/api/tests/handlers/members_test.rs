use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestApp;

#[tokio::test]
async fn create_member_returns_created_with_trimmed_name() {
    let app = TestApp::new();

    let response = app
        .post("/api/members")
        .await
        .json(&json!({ "name": "  Alice  " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Alice");
    assert!(body["id"].as_str().is_some());
    assert!(body["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn create_member_requires_name() {
    let app = TestApp::new();

    for payload in [json!({}), json!({ "name": "   " })] {
        let response = app
            .post("/api/members")
            .await
            .json(&payload)
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], "Name is required");
    }
}

#[tokio::test]
async fn duplicate_member_name_conflicts() {
    let app = TestApp::new();
    app.add_member("Alice").await;

    let response = app
        .post("/api/members")
        .await
        .json(&json!({ "name": "Alice" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn members_are_listed_by_name() {
    let app = TestApp::new();
    for name in ["Charlie", "Alice", "Bob"] {
        app.add_member(name).await;
    }

    let response = app.get("/api/members").await.await;
    response.assert_status(StatusCode::OK);

    let names: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
}

#[tokio::test]
async fn deleting_member_removes_their_attendance() {
    let app = TestApp::new();
    let alice = app.add_member("Alice").await;
    let bob = app.add_member("Bob").await;
    app.mark(&alice, "morning", true).await.assert_status(StatusCode::OK);
    app.mark(&bob, "morning", true).await.assert_status(StatusCode::OK);

    let response = app.delete(&format!("/api/members/{}", alice)).await.await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["message"], "Member deleted");

    let today = app.get("/api/attendance/today").await.await.json::<Vec<Value>>();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0]["member"]["name"], "Bob");
    assert_eq!(app.store.entry_count(), 1);
}

#[tokio::test]
async fn deleting_unknown_member_is_not_found() {
    let app = TestApp::new();

    for id in ["3f1c6a36-0d3b-4a56-9d59-4a8f0c7c2d11", "not-a-uuid"] {
        let response = app
            .delete(&format!("/api/members/{}", id))
            .await
            .expect_failure()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Member not found");
    }
}
