use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::location::{Location, LocationDto};
use crate::store::LocationStore;

pub struct LocationService {
    locations: Arc<dyn LocationStore>,
}

impl LocationService {
    pub fn new(locations: Arc<dyn LocationStore>) -> Self {
        Self { locations }
    }

    pub async fn list_as_dto(&self) -> Result<Vec<LocationDto>> {
        let locations = self.locations.find_all().await?;
        Ok(locations.into_iter().map(LocationDto::from).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Location> {
        self.locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location not found".into()))
    }

    pub async fn find_by_id_as_dto(&self, id: Uuid) -> Result<LocationDto> {
        Ok(LocationDto::from(self.find_by_id(id).await?))
    }

    pub async fn create(&self, dto: LocationDto) -> Result<LocationDto> {
        let saved = self.locations.save(Location::from(dto)).await?;
        Ok(LocationDto::from(saved))
    }

    pub async fn update(&self, id: Uuid, dto: LocationDto) -> Result<LocationDto> {
        let mut location = self.find_by_id(id).await?;
        location.overlay(dto);
        let saved = self.locations.save(location).await?;
        Ok(LocationDto::from(saved))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.find_by_id(id).await?;
        self.locations.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryLocationStore;

    fn service() -> LocationService {
        LocationService::new(Arc::new(MemoryLocationStore::default()))
    }

    #[tokio::test]
    async fn update_overlays_label() {
        let service = service();

        let created = service
            .create(LocationDto {
                auditorium: Some("Auditorium A".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = service
            .update(
                created.id.unwrap(),
                LocationDto {
                    auditorium: Some("Auditorium B".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.auditorium.as_deref(), Some("Auditorium B"));
    }

    #[tokio::test]
    async fn find_on_missing_location_fails() {
        let service = service();
        let result = service.find_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
