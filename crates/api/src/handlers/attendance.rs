use axum::{Json, extract::State};
use rollcall_core::{
    auth::ADMIN_ACTOR,
    models::{
        attendance::{AttendanceRecord, CommitRequest, CommitResponse, MarkAttendanceRequest},
        summary::AttendanceSummary,
    },
    services::{commit, register, summary},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn mark_attendance(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<MarkAttendanceRequest>,
) -> Result<Json<AttendanceRecord>, AppError> {
    let date = state.dates.today();
    let record = register::mark_request(state.store.as_ref(), &payload, date).await?;
    Ok(Json(record))
}

#[axum::debug_handler]
pub async fn today_attendance(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let date = state.dates.today();
    let records = register::list_for_date(state.store.as_ref(), date).await?;
    Ok(Json(records))
}

#[axum::debug_handler]
pub async fn today_summary(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AttendanceSummary>, AppError> {
    let date = state.dates.today();
    let result = summary::summary(state.store.as_ref(), date).await?;
    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn commit_attendance(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CommitRequest>,
) -> Result<Json<CommitResponse>, AppError> {
    let date = state.dates.today();
    let response = commit::commit(
        state.store.as_ref(),
        state.admin_secret.as_ref(),
        date,
        &payload,
        ADMIN_ACTOR,
    )
    .await?;
    Ok(Json(response))
}
