//! Alert Routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use record_validator::AlertDraft;
use serde::Serialize;
use std::sync::Arc;
use storage::Alert;

use crate::error::ApiError;
use crate::AppState;

/// Response for the alert listing endpoint
#[derive(Debug, Serialize)]
pub struct AlertListResponse {
    pub data: Vec<Alert>,
    pub count: usize,
    pub active_count: usize,
}

/// Response for the alert delete endpoint
#[derive(Debug, Serialize)]
pub struct DeletedAlertResponse {
    pub deleted: Alert,
}

/// Create an alert
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<AlertDraft>,
) -> Result<(StatusCode, Json<Alert>), ApiError> {
    let alert = state.service.create_alert(draft).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// List alerts, newest first
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AlertListResponse>, ApiError> {
    let data = state.service.list_alerts().await?;
    let active_count = data.iter().filter(|a| a.active).count();

    Ok(Json(AlertListResponse {
        count: data.len(),
        active_count,
        data,
    }))
}

/// Delete one alert by identifier
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedAlertResponse>, ApiError> {
    let deleted = state.service.delete_alert(&id).await?;
    Ok(Json(DeletedAlertResponse { deleted }))
}
