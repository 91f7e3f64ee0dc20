use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{error::Result, models::checkin::CheckinDto, AppState};

pub async fn record(
    State(state): State<AppState>,
    Json(dto): Json<CheckinDto>,
) -> Result<Json<CheckinDto>> {
    Ok(Json(state.checkins.record(dto).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CheckinDto>> {
    Ok(Json(state.checkins.find_by_id_as_dto(id).await?))
}

pub async fn list_by_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CheckinDto>>> {
    Ok(Json(state.checkins.list_by_event(id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    state.checkins.delete(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
