use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{error::Result, models::user::UserDto, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>> {
    Ok(Json(state.users.list_as_dto().await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDto>> {
    Ok(Json(state.users.find_by_id_as_dto(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<UserDto>,
) -> Result<Json<UserDto>> {
    Ok(Json(state.users.create(dto).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UserDto>,
) -> Result<Json<UserDto>> {
    Ok(Json(state.users.update(id, dto).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    state.users.delete(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
