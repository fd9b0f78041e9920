//! Weather Record Routes

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use record_validator::RecordDraft;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{StatsSummary, WeatherRecord};

use crate::error::ApiError;
use crate::AppState;

/// Query parameters for the record listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Applied only when positive; absent, zero, or negative means all
    pub limit: Option<i64>,
}

/// Response for listing endpoints
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub data: Vec<WeatherRecord>,
    pub count: usize,
}

impl RecordListResponse {
    fn wrap(data: Vec<WeatherRecord>) -> Json<Self> {
        Json(Self {
            count: data.len(),
            data,
        })
    }
}

/// Response for the delete endpoint, carrying the removed document
#[derive(Debug, Serialize)]
pub struct DeletedRecordResponse {
    pub deleted: WeatherRecord,
}

/// Create a record
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<RecordDraft>,
) -> Result<(StatusCode, Json<WeatherRecord>), ApiError> {
    let record = state.service.create_record(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List records, newest first
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<RecordListResponse>, ApiError> {
    let data = state.service.list_records(params.limit).await?;
    Ok(RecordListResponse::wrap(data))
}

/// Most recent record
pub async fn latest(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WeatherRecord>, ApiError> {
    Ok(Json(state.service.latest_record().await?))
}

/// Summary statistics over the whole collection
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsSummary>, ApiError> {
    Ok(Json(state.service.record_stats().await?))
}

/// Records within one calendar day (YYYY-MM-DD), ascending
pub async fn by_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<RecordListResponse>, ApiError> {
    let data = state.service.records_for_date(&date).await?;
    Ok(RecordListResponse::wrap(data))
}

/// Records for one station (exact match)
pub async fn by_station(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<RecordListResponse>, ApiError> {
    let data = state.service.records_for_station(&name).await?;
    Ok(RecordListResponse::wrap(data))
}

/// Get one record by identifier
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WeatherRecord>, ApiError> {
    Ok(Json(state.service.record_by_id(&id).await?))
}

/// Full-replace update (PUT)
pub async fn replace(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(draft): Json<RecordDraft>,
) -> Result<Json<WeatherRecord>, ApiError> {
    Ok(Json(state.service.replace_record(&id, draft).await?))
}

/// Partial-merge update (PATCH)
pub async fn merge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(draft): Json<RecordDraft>,
) -> Result<Json<WeatherRecord>, ApiError> {
    Ok(Json(state.service.merge_record(&id, draft).await?))
}

/// Delete one record by identifier
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedRecordResponse>, ApiError> {
    let deleted = state.service.delete_record(&id).await?;
    Ok(Json(DeletedRecordResponse { deleted }))
}
