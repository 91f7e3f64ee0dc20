use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::certificate::{CertificateTemplate, CertificateTemplateDto};
use crate::store::CertificateTemplateStore;

pub struct CertificateTemplateService {
    templates: Arc<dyn CertificateTemplateStore>,
}

impl CertificateTemplateService {
    pub fn new(templates: Arc<dyn CertificateTemplateStore>) -> Self {
        Self { templates }
    }

    pub async fn list_as_dto(&self) -> Result<Vec<CertificateTemplateDto>> {
        let templates = self.templates.find_all().await?;
        Ok(templates
            .into_iter()
            .map(CertificateTemplateDto::from)
            .collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<CertificateTemplate> {
        self.templates
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Certificate template not found".into()))
    }

    pub async fn find_by_id_as_dto(&self, id: Uuid) -> Result<CertificateTemplateDto> {
        Ok(CertificateTemplateDto::from(self.find_by_id(id).await?))
    }

    pub async fn create(&self, dto: CertificateTemplateDto) -> Result<CertificateTemplateDto> {
        let saved = self.templates.save(CertificateTemplate::from(dto)).await?;
        Ok(CertificateTemplateDto::from(saved))
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: CertificateTemplateDto,
    ) -> Result<CertificateTemplateDto> {
        let mut template = self.find_by_id(id).await?;
        template.overlay(dto);
        let saved = self.templates.save(template).await?;
        Ok(CertificateTemplateDto::from(saved))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.find_by_id(id).await?;
        self.templates.delete_by_id(id).await
    }
}
