use axum::{Json, Router, extract::State, routing::get};
use rollcall_core::date::DateKey;
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

/// Liveness plus the date key the server currently treats as today.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    date: DateKey,
    timezone: &'static str,
}

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        date: state.dates.today(),
        timezone: state.dates.timezone().name(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Unauthenticated probes.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
