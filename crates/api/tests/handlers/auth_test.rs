use axum::http::{StatusCode, header::AUTHORIZATION};
use pretty_assertions::assert_eq;
use rollcall_api::middleware::auth::{AdminSecret, hash_password};
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{ADMIN_PASSWORD, TestApp, bearer};

#[tokio::test]
async fn login_issues_a_working_token() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .await;
    response.assert_status(StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["expiresInSeconds"], 12 * 60 * 60);

    let token = body["token"].as_str().unwrap();
    let me = app
        .server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(token))
        .await;
    me.assert_status(StatusCode::OK);
    assert_eq!(me.json::<Value>()["role"], "admin");
}

#[tokio::test]
async fn login_accepts_argon2_secret() {
    let hash = hash_password("hashed-secret").unwrap();
    let app = TestApp::with_secret(Some(AdminSecret::Argon2(hash)));

    app.server
        .post("/api/auth/login")
        .json(&json!({ "password": "hashed-secret" }))
        .await
        .assert_status(StatusCode::OK);

    app.server
        .post("/api/auth/login")
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .expect_failure()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case::wrong(json!({ "password": "nope" }), StatusCode::UNAUTHORIZED, "Invalid password")]
#[case::padded(json!({ "password": " letmein " }), StatusCode::UNAUTHORIZED, "Invalid password")]
#[case::blank(json!({ "password": "   " }), StatusCode::BAD_REQUEST, "Password is required")]
#[case::missing(json!({}), StatusCode::BAD_REQUEST, "Password is required")]
#[tokio::test]
async fn login_rejections(
    #[case] payload: Value,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&payload)
        .expect_failure()
        .await;

    response.assert_status(status);
    assert_eq!(response.json::<Value>()["message"], message);
    assert_eq!(app.state.sessions.active_count().await, 0);
}

#[tokio::test]
async fn login_without_configured_secret_is_a_server_error() {
    let app = TestApp::with_secret(None);

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "Admin password is not configured on the server"
    );
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .server
        .post("/api/auth/logout")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["message"], "Logged out");

    let after = app
        .server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .expect_failure()
        .await;
    after.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(after.json::<Value>()["message"], "Invalid or expired token");
}

#[tokio::test]
async fn logout_keeps_other_sessions() {
    let app = TestApp::new();
    let first = app.login().await;
    let second = app.login().await;
    assert_ne!(first, second);

    app.server
        .post("/api/auth/logout")
        .add_header(AUTHORIZATION, bearer(&first))
        .await
        .assert_status(StatusCode::OK);

    app.server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&second))
        .await
        .assert_status(StatusCode::OK);
}
