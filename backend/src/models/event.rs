use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::certificate::{Certificate, CertificateDto};
use crate::models::user::{User, UserDto};

/// Full event record. `dates`, `certificate` and `participants` live in
/// sibling tables; the service layer attaches them where an operation calls
/// for it, so they are skipped by the row mapper.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ends_at: OffsetDateTime,
    pub location_id: Uuid,
    pub organizer_id: Uuid,
    pub background_image_url: Option<String>,
    #[sqlx(skip)]
    pub dates: Vec<DateRange>,
    #[sqlx(skip)]
    pub certificate: Option<Certificate>,
    #[sqlx(skip)]
    pub participants: Vec<User>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// One scheduled occurrence of an event. Owned by the event and stamped
/// with its id when the event is created.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DateRange {
    pub id: Uuid,
    pub event_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ends_at: OffsetDateTime,
}

/// Many-to-many link between an event and a registered participant.
/// Weak reference: resolved to a full `User` on demand, never owned.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventParticipant {
    pub event_id: Uuid,
    pub user_id: Uuid,
}

/// Display-ready projection of an event for listing UIs: formatted dates
/// and times with the organizer and location already resolved. Built fresh
/// per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEvent {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub location: String,
    pub organizer: String,
    pub event_id: Uuid,
}

/// Wire shape of an event. Every field is optional: absent fields are
/// preserved on overlay updates, and `background_image` carries the inbound
/// base64 payload that `background_image_url` is derived from on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub starts_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub ends_at: Option<OffsetDateTime>,
    pub location_id: Option<Uuid>,
    pub organizer_id: Option<Uuid>,
    pub background_image: Option<String>,
    pub background_image_url: Option<String>,
    pub dates: Option<Vec<DateRangeDto>>,
    pub certificate: Option<CertificateDto>,
    pub participants: Option<Vec<UserDto>>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRangeDto {
    pub id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub starts_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub ends_at: Option<OffsetDateTime>,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: Some(event.id),
            name: Some(event.name),
            description: Some(event.description),
            starts_at: Some(event.starts_at),
            ends_at: Some(event.ends_at),
            location_id: Some(event.location_id),
            organizer_id: Some(event.organizer_id),
            background_image: None,
            background_image_url: event.background_image_url,
            dates: Some(event.dates.into_iter().map(DateRangeDto::from).collect()),
            certificate: event.certificate.map(CertificateDto::from),
            participants: Some(event.participants.into_iter().map(UserDto::from).collect()),
            created_at: Some(event.created_at),
        }
    }
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            name: dto.name.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            starts_at: dto.starts_at.unwrap_or(OffsetDateTime::UNIX_EPOCH),
            ends_at: dto.ends_at.unwrap_or(OffsetDateTime::UNIX_EPOCH),
            location_id: dto.location_id.unwrap_or_else(Uuid::nil),
            organizer_id: dto.organizer_id.unwrap_or_else(Uuid::nil),
            background_image_url: dto.background_image_url,
            dates: dto
                .dates
                .map(|dates| dates.into_iter().map(DateRange::from).collect())
                .unwrap_or_default(),
            certificate: dto.certificate.map(Certificate::from),
            participants: dto
                .participants
                .map(|users| users.into_iter().map(User::from).collect())
                .unwrap_or_default(),
            created_at: dto.created_at.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}

impl From<DateRange> for DateRangeDto {
    fn from(range: DateRange) -> Self {
        Self {
            id: Some(range.id),
            event_id: Some(range.event_id),
            starts_at: Some(range.starts_at),
            ends_at: Some(range.ends_at),
        }
    }
}

impl From<DateRangeDto> for DateRange {
    fn from(dto: DateRangeDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            event_id: dto.event_id.unwrap_or_else(Uuid::nil),
            starts_at: dto.starts_at.unwrap_or(OffsetDateTime::UNIX_EPOCH),
            ends_at: dto.ends_at.unwrap_or(OffsetDateTime::UNIX_EPOCH),
        }
    }
}

impl Event {
    /// Overwrite each field present in the incoming dto; absent fields keep
    /// their current value. Sub-objects are replaced wholesale, not merged.
    pub fn overlay(&mut self, dto: EventDto) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(description) = dto.description {
            self.description = description;
        }
        if let Some(starts_at) = dto.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(ends_at) = dto.ends_at {
            self.ends_at = ends_at;
        }
        if let Some(location_id) = dto.location_id {
            self.location_id = location_id;
        }
        if let Some(organizer_id) = dto.organizer_id {
            self.organizer_id = organizer_id;
        }
        if let Some(url) = dto.background_image_url {
            self.background_image_url = Some(url);
        }
        if let Some(dates) = dto.dates {
            self.dates = dates.into_iter().map(DateRange::from).collect();
        }
        if let Some(certificate) = dto.certificate {
            self.certificate = Some(certificate.into());
        }
        if let Some(participants) = dto.participants {
            self.participants = participants.into_iter().map(User::from).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_event() -> Event {
        let id = Uuid::new_v4();
        Event {
            id,
            name: "Rust Workshop".into(),
            description: "Hands-on introduction".into(),
            starts_at: datetime!(2024-03-05 09:30 UTC),
            ends_at: datetime!(2024-03-05 11:00 UTC),
            location_id: Uuid::new_v4(),
            organizer_id: Uuid::new_v4(),
            background_image_url: Some("https://cdn.example.org/bg.png".into()),
            dates: vec![DateRange {
                id: Uuid::new_v4(),
                event_id: id,
                starts_at: datetime!(2024-03-05 09:30 UTC),
                ends_at: datetime!(2024-03-05 11:00 UTC),
            }],
            certificate: Some(Certificate {
                id: Uuid::new_v4(),
                event_id: id,
                template_id: Some(Uuid::new_v4()),
            }),
            participants: vec![],
            created_at: datetime!(2024-02-01 12:00 UTC),
        }
    }

    #[test]
    fn dto_round_trip_preserves_all_fields() {
        let event = sample_event();
        let back = Event::from(EventDto::from(event.clone()));

        assert_eq!(back.id, event.id);
        assert_eq!(back.name, event.name);
        assert_eq!(back.description, event.description);
        assert_eq!(back.starts_at, event.starts_at);
        assert_eq!(back.ends_at, event.ends_at);
        assert_eq!(back.location_id, event.location_id);
        assert_eq!(back.organizer_id, event.organizer_id);
        assert_eq!(back.background_image_url, event.background_image_url);
        assert_eq!(back.dates.len(), 1);
        assert_eq!(back.dates[0].id, event.dates[0].id);
        assert_eq!(back.dates[0].event_id, event.id);
        assert_eq!(
            back.certificate.as_ref().map(|c| c.id),
            event.certificate.as_ref().map(|c| c.id)
        );
        assert_eq!(back.created_at, event.created_at);
    }

    #[test]
    fn overlay_overwrites_present_and_keeps_absent_fields() {
        let mut event = sample_event();
        event.description = "A".into();

        event.overlay(EventDto {
            name: Some("B".into()),
            description: None,
            ..Default::default()
        });

        assert_eq!(event.name, "B");
        assert_eq!(event.description, "A");
    }

    #[test]
    fn overlay_replaces_sub_objects_wholesale() {
        let mut event = sample_event();
        let replacement = DateRangeDto {
            starts_at: Some(datetime!(2024-04-01 10:00 UTC)),
            ends_at: Some(datetime!(2024-04-01 12:00 UTC)),
            ..Default::default()
        };

        event.overlay(EventDto {
            dates: Some(vec![replacement]),
            ..Default::default()
        });

        assert_eq!(event.dates.len(), 1);
        assert_eq!(event.dates[0].starts_at, datetime!(2024-04-01 10:00 UTC));
    }
}
