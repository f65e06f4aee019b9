use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rollcall_core::{
    errors::AttendanceError,
    models::member::{CreateMemberRequest, Member, MessageResponse},
    services::roster,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn create_member(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Member>), AppError> {
    let member = roster::create_member(state.store.as_ref(), payload.name.as_deref()).await?;
    info!(member_id = %member.id, "member created");

    Ok((StatusCode::CREATED, Json(member)))
}

#[axum::debug_handler]
pub async fn list_members(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Member>>, AppError> {
    let members = roster::list_members(state.store.as_ref()).await?;
    Ok(Json(members))
}

#[axum::debug_handler]
pub async fn delete_member(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    // A malformed id cannot name a member
    let id = Uuid::parse_str(&id)
        .map_err(|_| AttendanceError::NotFound("Member not found".to_string()))?;

    roster::delete_member(state.store.as_ref(), id).await?;
    info!(member_id = %id, "member deleted");

    Ok(Json(MessageResponse::new("Member deleted")))
}
