use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::TestApp;

#[tokio::test]
async fn health_reports_today_in_server_timezone() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;
    response.assert_status(StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["date"], app.today().to_string());
    assert_eq!(body["timezone"], "Asia/Kolkata");
}

#[tokio::test]
async fn version_needs_no_session() {
    let app = TestApp::new();

    let response = app.server.get("/version").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["version"], env!("CARGO_PKG_VERSION"));
}
