use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::Result,
    models::certificate::CertificateDto,
    models::event::{DisplayEvent, EventDto},
    models::user::UserDto,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EventListParams {
    pub organizer: Option<Uuid>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> Result<Json<Vec<EventDto>>> {
    let events = match params.organizer {
        Some(organizer_id) => state.events.list_by_organizer_as_dto(organizer_id).await?,
        None => state.events.list_as_dto().await?,
    };
    Ok(Json(events))
}

pub async fn list_display(State(state): State<AppState>) -> Result<Json<Vec<DisplayEvent>>> {
    Ok(Json(state.events.list_display().await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDto>> {
    Ok(Json(state.events.find_by_id_as_dto(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<EventDto>,
) -> Result<Json<EventDto>> {
    Ok(Json(state.events.create(dto).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<EventDto>,
) -> Result<Json<EventDto>> {
    Ok(Json(state.events.update(id, dto).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    state.events.delete(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[derive(Debug, Deserialize)]
pub struct RegisterParticipantRequest {
    pub user_id: Uuid,
}

pub async fn register_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RegisterParticipantRequest>,
) -> Result<Json<serde_json::Value>> {
    state.events.register_participant(id, req.user_id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub async fn list_participants(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<UserDto>>> {
    Ok(Json(state.events.list_participants(id).await?))
}

pub async fn unregister_participant(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>> {
    state.events.unregister_participant(id, user_id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub async fn get_certificate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CertificateDto>> {
    Ok(Json(state.events.certificate_by_event(id).await?))
}
