use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A venue an event takes place in, labelled by its auditorium.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Location {
    pub id: Uuid,
    pub auditorium: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationDto {
    pub id: Option<Uuid>,
    pub auditorium: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            id: Some(location.id),
            auditorium: Some(location.auditorium),
            created_at: Some(location.created_at),
        }
    }
}

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            auditorium: dto.auditorium.unwrap_or_default(),
            created_at: dto.created_at.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}

impl Location {
    pub fn overlay(&mut self, dto: LocationDto) {
        if let Some(auditorium) = dto.auditorium {
            self.auditorium = auditorium;
        }
    }
}
