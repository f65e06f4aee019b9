use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum_test::{TestRequest, TestServer};
use rollcall_api::{ApiState, middleware::auth::AdminSecret, router};
use rollcall_core::{
    date::{DateKey, DateKeyResolver},
    store::{AttendanceStore, memory::MemoryStore},
};
use serde_json::{Value, json};

pub const ADMIN_PASSWORD: &str = "letmein";

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    pub state: Arc<ApiState>,
}

impl TestApp {
    /// App over an empty in-memory store with a plaintext admin secret.
    pub fn new() -> Self {
        Self::with_secret(Some(AdminSecret::Plaintext(ADMIN_PASSWORD.to_string())))
    }

    pub fn with_secret(secret: Option<AdminSecret>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let shared: Arc<dyn AttendanceStore> = store.clone();
        let state = Arc::new(ApiState::new(
            shared,
            secret,
            chrono::Duration::hours(12),
            DateKeyResolver::default(),
        ));

        Self::from_state(state, store)
    }

    /// App over an arbitrary store, e.g. a mock.
    pub fn with_store(store: Arc<dyn AttendanceStore>) -> TestServer {
        let state = Arc::new(ApiState::new(
            store,
            Some(AdminSecret::Plaintext(ADMIN_PASSWORD.to_string())),
            chrono::Duration::hours(12),
            DateKeyResolver::default(),
        ));
        TestServer::new(router(state)).unwrap()
    }

    fn from_state(state: Arc<ApiState>, store: Arc<MemoryStore>) -> Self {
        let server = TestServer::new(router(Arc::clone(&state))).unwrap();
        Self {
            server,
            store,
            state,
        }
    }

    pub fn today(&self) -> DateKey {
        self.state.dates.today()
    }

    /// Logs in with the admin password and returns the bearer token.
    pub async fn login(&self) -> String {
        login(&self.server).await
    }

    pub async fn get(&self, path: &str) -> TestRequest {
        let token = self.login().await;
        self.server.get(path).add_header(AUTHORIZATION, bearer(&token))
    }

    pub async fn post(&self, path: &str) -> TestRequest {
        let token = self.login().await;
        self.server.post(path).add_header(AUTHORIZATION, bearer(&token))
    }

    pub async fn delete(&self, path: &str) -> TestRequest {
        let token = self.login().await;
        self.server.delete(path).add_header(AUTHORIZATION, bearer(&token))
    }

    /// Creates a member through the API and returns its id.
    pub async fn add_member(&self, name: &str) -> String {
        let response = self
            .post("/api/members")
            .await
            .json(&json!({ "name": name }))
            .await;
        response.json::<Value>()["id"].as_str().unwrap().to_string()
    }

    pub async fn mark(&self, member_id: &str, session: &str, present: bool) -> axum_test::TestResponse {
        self.post("/api/attendance")
            .await
            .json(&json!({ "memberId": member_id, "session": session, "present": present }))
            .await
    }

    pub async fn commit(&self, session: &str, action: &str, password: &str) -> axum_test::TestResponse {
        self.post("/api/attendance/commit")
            .await
            .json(&json!({ "session": session, "action": action, "password": password }))
            .await
    }
}

pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .await;
    response.json::<Value>()["token"].as_str().unwrap().to_string()
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (AUTHORIZATION, bearer(token))
}
