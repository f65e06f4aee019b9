use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/attendance", post(handlers::attendance::mark_attendance))
        .route(
            "/api/attendance/today",
            get(handlers::attendance::today_attendance),
        )
        .route(
            "/api/attendance/summary",
            get(handlers::attendance::today_summary),
        )
        .route(
            "/api/attendance/commit",
            post(handlers::attendance::commit_attendance),
        )
}
