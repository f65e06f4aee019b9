use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use pretty_assertions::assert_eq;
use rollcall_api::middleware::{auth, error_handling::map_error};
use rollcall_core::{errors::AttendanceError, models::attendance::Session};
use rstest::rstest;
use serde_json::Value;

use crate::test_utils::{TestApp, auth_header};

#[rstest]
#[case::not_found(AttendanceError::NotFound("Member not found".into()), StatusCode::NOT_FOUND)]
#[case::validation(AttendanceError::Validation("Invalid payload".into()), StatusCode::BAD_REQUEST)]
#[case::conflict(AttendanceError::Conflict("Member already exists".into()), StatusCode::CONFLICT)]
#[case::locked(AttendanceError::Locked(Session::Evening), StatusCode::LOCKED)]
#[case::authentication(AttendanceError::Authentication("Invalid password".into()), StatusCode::UNAUTHORIZED)]
#[case::misconfigured(AttendanceError::Misconfigured, StatusCode::INTERNAL_SERVER_ERROR)]
#[case::database(AttendanceError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
fn error_maps_to_status(#[case] error: AttendanceError, #[case] status: StatusCode) {
    assert_eq!(map_error(error).status(), status);
}

#[test]
fn internal_error_maps_to_server_error() {
    let error = AttendanceError::Internal(Box::new(std::io::Error::other("Internal error")));
    assert_eq!(map_error(error).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn hash_password_produces_argon2_phc() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[rstest]
#[case::members("/api/members")]
#[case::today("/api/attendance/today")]
#[case::summary("/api/attendance/summary")]
#[case::me("/api/auth/me")]
#[tokio::test]
async fn protected_routes_need_a_session(#[case] path: &str) {
    let app = TestApp::new();

    let response = app.server.get(path).expect_failure().await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Not authenticated");
}

#[rstest]
#[case::unknown_token("Bearer not-a-real-token")]
#[case::wrong_scheme("Basic YWRtaW46bGV0bWVpbg==")]
#[tokio::test]
async fn bad_credentials_are_rejected(#[case] header: &'static str) {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/attendance/commit")
        .add_header(AUTHORIZATION, HeaderValue::from_static(header))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.status_count(), 0);
}

#[tokio::test]
async fn revoked_session_is_rejected() {
    let app = TestApp::new();
    let token = app.login().await;
    let (name, value) = auth_header(&token);

    app.server
        .get("/api/members")
        .add_header(name.clone(), value.clone())
        .await
        .assert_status(StatusCode::OK);

    app.state.sessions.revoke(&token).await;

    let response = app
        .server
        .get("/api/members")
        .add_header(name, value)
        .expect_failure()
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Invalid or expired token");
}
