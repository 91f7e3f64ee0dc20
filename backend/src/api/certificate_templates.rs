use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{error::Result, models::certificate::CertificateTemplateDto, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CertificateTemplateDto>>> {
    Ok(Json(state.certificate_templates.list_as_dto().await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CertificateTemplateDto>> {
    Ok(Json(state.certificate_templates.find_by_id_as_dto(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CertificateTemplateDto>,
) -> Result<Json<CertificateTemplateDto>> {
    Ok(Json(state.certificate_templates.create(dto).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CertificateTemplateDto>,
) -> Result<Json<CertificateTemplateDto>> {
    Ok(Json(state.certificate_templates.update(id, dto).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    state.certificate_templates.delete(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
