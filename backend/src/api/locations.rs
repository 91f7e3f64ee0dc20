use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{error::Result, models::location::LocationDto, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<LocationDto>>> {
    Ok(Json(state.locations.list_as_dto().await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LocationDto>> {
    Ok(Json(state.locations.find_by_id_as_dto(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<LocationDto>,
) -> Result<Json<LocationDto>> {
    Ok(Json(state.locations.create(dto).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<LocationDto>,
) -> Result<Json<LocationDto>> {
    Ok(Json(state.locations.update(id, dto).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    state.locations.delete(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
