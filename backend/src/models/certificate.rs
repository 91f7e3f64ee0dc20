use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Certificate generated for an event. Owned by the event: it is written
/// together with the event on creation, stamped with the event id.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub event_id: Uuid,
    pub template_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateDto {
    pub id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub template_id: Option<Uuid>,
}

impl From<Certificate> for CertificateDto {
    fn from(certificate: Certificate) -> Self {
        Self {
            id: Some(certificate.id),
            event_id: Some(certificate.event_id),
            template_id: certificate.template_id,
        }
    }
}

impl From<CertificateDto> for Certificate {
    fn from(dto: CertificateDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            event_id: dto.event_id.unwrap_or_else(Uuid::nil),
            template_id: dto.template_id,
        }
    }
}

/// Reusable certificate layout a generated certificate references.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CertificateTemplate {
    pub id: Uuid,
    pub name: String,
    pub background_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateTemplateDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub background_url: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl From<CertificateTemplate> for CertificateTemplateDto {
    fn from(template: CertificateTemplate) -> Self {
        Self {
            id: Some(template.id),
            name: Some(template.name),
            background_url: template.background_url,
            created_at: Some(template.created_at),
        }
    }
}

impl From<CertificateTemplateDto> for CertificateTemplate {
    fn from(dto: CertificateTemplateDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            name: dto.name.unwrap_or_default(),
            background_url: dto.background_url,
            created_at: dto.created_at.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}

impl CertificateTemplate {
    pub fn overlay(&mut self, dto: CertificateTemplateDto) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(background_url) = dto.background_url {
            self.background_url = Some(background_url);
        }
    }
}
