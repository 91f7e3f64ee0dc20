use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A participant's recorded attendance at an event.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Checkin {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub checked_in_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckinDto {
    pub id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub checked_in_at: Option<OffsetDateTime>,
}

impl From<Checkin> for CheckinDto {
    fn from(checkin: Checkin) -> Self {
        Self {
            id: Some(checkin.id),
            event_id: Some(checkin.event_id),
            user_id: Some(checkin.user_id),
            checked_in_at: Some(checkin.checked_in_at),
        }
    }
}

impl From<CheckinDto> for Checkin {
    fn from(dto: CheckinDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            event_id: dto.event_id.unwrap_or_else(Uuid::nil),
            user_id: dto.user_id.unwrap_or_else(Uuid::nil),
            checked_in_at: dto.checked_in_at.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}
