use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

/// Routes reachable without a session.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/api/auth/login", post(handlers::auth::login))
}

/// Routes that need an admin session.
pub fn protected_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
}
