use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::certificate::CertificateDto;
use crate::models::event::{DisplayEvent, Event, EventDto, EventParticipant};
use crate::models::user::UserDto;
use crate::service::display;
use crate::store::{
    CertificateStore, DateRangeStore, EventStore, LocationStore, ParticipantStore, UserStore,
};
use crate::upload::{ImagePayload, ImageUploader};

/// Coordinates event reads and writes across the event, date-range,
/// certificate and participant stores.
///
/// Creation is a sequence of independent writes (event first, then its
/// sub-records): there is no shared commit point, so a failed sub-record
/// write leaves the already-committed event in place.
pub struct EventService {
    events: Arc<dyn EventStore>,
    users: Arc<dyn UserStore>,
    locations: Arc<dyn LocationStore>,
    dates: Arc<dyn DateRangeStore>,
    certificates: Arc<dyn CertificateStore>,
    participants: Arc<dyn ParticipantStore>,
    uploader: Arc<dyn ImageUploader>,
}

impl EventService {
    pub fn new(
        events: Arc<dyn EventStore>,
        users: Arc<dyn UserStore>,
        locations: Arc<dyn LocationStore>,
        dates: Arc<dyn DateRangeStore>,
        certificates: Arc<dyn CertificateStore>,
        participants: Arc<dyn ParticipantStore>,
        uploader: Arc<dyn ImageUploader>,
    ) -> Self {
        Self {
            events,
            users,
            locations,
            dates,
            certificates,
            participants,
            uploader,
        }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        self.events.find_all().await
    }

    pub async fn list_as_dto(&self) -> Result<Vec<EventDto>> {
        let events = self.list().await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }

    pub async fn list_by_organizer_as_dto(&self, organizer_id: Uuid) -> Result<Vec<EventDto>> {
        let events = self.events.find_all_by_organizer(organizer_id).await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Display-ready listing: every event joined with its organizer name
    /// and location label, schedule formatted as dd/MM/yyyy and HH:mm.
    pub async fn list_display(&self) -> Result<Vec<DisplayEvent>> {
        let events = self.events.find_all().await?;
        let organizers = self.users.find_all().await?;
        let locations = self.locations.find_all().await?;
        display::assemble(&events, &organizers, &locations)
    }

    /// Fetch one event and resolve its participant links to full user
    /// records. Any unresolvable link aborts the read.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let mut event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

        let links = self.participants.find_all_by_event(id).await?;
        let mut participants = Vec::with_capacity(links.len());
        for link in links {
            let user = self.users.find_by_id(link.user_id).await?.ok_or_else(|| {
                AppError::NotFound(format!("Participant {} not found", link.user_id))
            })?;
            participants.push(user);
        }
        event.participants = participants;

        Ok(event)
    }

    pub async fn find_by_id_as_dto(&self, id: Uuid) -> Result<EventDto> {
        Ok(EventDto::from(self.find_by_id(id).await?))
    }

    /// Create an event together with its date ranges and certificate.
    ///
    /// The background image payload is uploaded first and the resulting URL
    /// stamped on the event; the event is persisted before its sub-records
    /// so their `event_id` can be stamped from the persisted row.
    pub async fn create(&self, dto: EventDto) -> Result<EventDto> {
        if let Some(dates) = &dto.dates {
            for range in dates {
                if let (Some(starts_at), Some(ends_at)) = (range.starts_at, range.ends_at) {
                    if starts_at > ends_at {
                        return Err(AppError::validation(
                            "dates",
                            "date range start must not be after its end",
                        ));
                    }
                }
            }
        }

        let background_image_url = match &dto.background_image {
            Some(payload) => {
                let image = ImagePayload::from_data_url(payload)?;
                Some(self.uploader.upload(&image).await?)
            }
            None => None,
        };

        let mut event = Event::from(dto);
        if background_image_url.is_some() {
            event.background_image_url = background_image_url;
        }

        let dates = std::mem::take(&mut event.dates);
        let certificate = event.certificate.take();

        let mut saved = self.events.save(event).await?;
        tracing::info!(event_id = %saved.id, "event created");

        for mut range in dates {
            range.event_id = saved.id;
            saved.dates.push(self.dates.save(range).await?);
        }

        if let Some(mut certificate) = certificate {
            certificate.event_id = saved.id;
            saved.certificate = Some(self.certificates.save(certificate).await?);
        }

        Ok(EventDto::from(saved))
    }

    /// Overlay every present field of the incoming dto onto the stored
    /// event and persist the merged result. Absent fields stay untouched.
    pub async fn update(&self, id: Uuid, dto: EventDto) -> Result<EventDto> {
        let mut event = self.find_by_id(id).await?;
        event.overlay(dto);
        let saved = self.events.save(event).await?;
        Ok(EventDto::from(saved))
    }

    /// Delete an existing event. Date ranges, the certificate and
    /// participant links are left in place.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.find_by_id(id).await?;
        self.events.delete_by_id(id).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }

    pub async fn register_participant(&self, event_id: Uuid, user_id: Uuid) -> Result<()> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        self.participants
            .save(EventParticipant { event_id, user_id })
            .await?;
        Ok(())
    }

    pub async fn list_participants(&self, event_id: Uuid) -> Result<Vec<UserDto>> {
        let event = self.find_by_id(event_id).await?;
        Ok(event.participants.into_iter().map(UserDto::from).collect())
    }

    pub async fn unregister_participant(&self, event_id: Uuid, user_id: Uuid) -> Result<()> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
        self.participants.delete(event_id, user_id).await
    }

    pub async fn certificate_by_event(&self, event_id: Uuid) -> Result<CertificateDto> {
        let certificate = self
            .certificates
            .find_by_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Certificate not found".into()))?;
        Ok(CertificateDto::from(certificate))
    }
}
