use axum::{Json, extract::State, http::HeaderMap};
use rollcall_core::errors::AttendanceError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    ApiState,
    middleware::{auth::bearer_token, error_handling::AppError},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub expires_in_seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let password = payload
        .password
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AttendanceError::Validation("Password is required".to_string()))?;

    let secret = state
        .admin_secret
        .as_ref()
        .ok_or(AttendanceError::Misconfigured)?;

    if !secret.verify_exact(password) {
        warn!("admin login rejected");
        return Err(AppError(AttendanceError::Authentication(
            "Invalid password".to_string(),
        )));
    }

    let token = state.sessions.issue().await;
    info!("admin logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        expires_in_seconds: state.sessions.ttl().num_seconds(),
    }))
}

#[axum::debug_handler]
pub async fn me() -> Json<MeResponse> {
    Json(MeResponse {
        role: "admin".to_string(),
    })
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Json<LogoutResponse> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.revoke(token).await;
    }

    Json(LogoutResponse {
        message: "Logged out".to_string(),
    })
}
