use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::checkin::{Checkin, CheckinDto};
use crate::store::{CheckinStore, EventStore, UserStore};

/// Records participant attendance. A check-in only makes sense against an
/// existing event and a known user, so both are verified before the write.
pub struct CheckinService {
    checkins: Arc<dyn CheckinStore>,
    events: Arc<dyn EventStore>,
    users: Arc<dyn UserStore>,
}

impl CheckinService {
    pub fn new(
        checkins: Arc<dyn CheckinStore>,
        events: Arc<dyn EventStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            checkins,
            events,
            users,
        }
    }

    pub async fn record(&self, dto: CheckinDto) -> Result<CheckinDto> {
        let event_id = dto
            .event_id
            .ok_or_else(|| AppError::BadRequest("event_id is required".into()))?;
        let user_id = dto
            .user_id
            .ok_or_else(|| AppError::BadRequest("user_id is required".into()))?;

        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        let saved = self.checkins.save(Checkin::from(dto)).await?;
        tracing::info!(event_id = %event_id, user_id = %user_id, "check-in recorded");
        Ok(CheckinDto::from(saved))
    }

    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<CheckinDto>> {
        let checkins = self.checkins.find_all_by_event(event_id).await?;
        Ok(checkins.into_iter().map(CheckinDto::from).collect())
    }

    pub async fn find_by_id_as_dto(&self, id: Uuid) -> Result<CheckinDto> {
        let checkin = self
            .checkins
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Check-in not found".into()))?;
        Ok(CheckinDto::from(checkin))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.find_by_id_as_dto(id).await?;
        self.checkins.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::OffsetDateTime;

    use crate::models::event::Event;
    use crate::models::user::User;
    use crate::store::memory::{MemoryCheckinStore, MemoryEventStore, MemoryUserStore};

    struct Fixture {
        service: CheckinService,
        events: Arc<MemoryEventStore>,
        users: Arc<MemoryUserStore>,
    }

    fn fixture() -> Fixture {
        let checkins = Arc::new(MemoryCheckinStore::default());
        let events = Arc::new(MemoryEventStore::default());
        let users = Arc::new(MemoryUserStore::default());
        let service = CheckinService::new(checkins, events.clone(), users.clone());
        Fixture {
            service,
            events,
            users,
        }
    }

    async fn seed(fx: &Fixture) -> (Uuid, Uuid) {
        let event = fx
            .events
            .save(Event {
                id: Uuid::new_v4(),
                name: "Workshop".into(),
                description: "".into(),
                starts_at: datetime!(2024-03-05 09:30 UTC),
                ends_at: datetime!(2024-03-05 11:00 UTC),
                location_id: Uuid::new_v4(),
                organizer_id: Uuid::new_v4(),
                background_image_url: None,
                dates: vec![],
                certificate: None,
                participants: vec![],
                created_at: OffsetDateTime::UNIX_EPOCH,
            })
            .await
            .unwrap();
        let user = fx
            .users
            .save(User {
                id: Uuid::new_v4(),
                name: "Ana".into(),
                email: "ana@example.org".into(),
                created_at: OffsetDateTime::UNIX_EPOCH,
            })
            .await
            .unwrap();
        (event.id, user.id)
    }

    #[tokio::test]
    async fn record_stamps_timestamp_and_lists_under_event() {
        let fx = fixture();
        let (event_id, user_id) = seed(&fx).await;

        let recorded = fx
            .service
            .record(CheckinDto {
                event_id: Some(event_id),
                user_id: Some(user_id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(recorded.checked_in_at.is_some());

        let listed = fx.service.list_by_event(event_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_id, Some(user_id));
    }

    #[tokio::test]
    async fn record_on_unknown_event_or_user_fails() {
        let fx = fixture();
        let (event_id, user_id) = seed(&fx).await;

        let unknown_event = fx
            .service
            .record(CheckinDto {
                event_id: Some(Uuid::new_v4()),
                user_id: Some(user_id),
                ..Default::default()
            })
            .await;
        assert!(matches!(unknown_event, Err(AppError::NotFound(_))));

        let unknown_user = fx
            .service
            .record(CheckinDto {
                event_id: Some(event_id),
                user_id: Some(Uuid::new_v4()),
                ..Default::default()
            })
            .await;
        assert!(matches!(unknown_user, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn record_without_event_id_is_a_bad_request() {
        let fx = fixture();
        let result = fx.service.record(CheckinDto::default()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
