//! Persistence seams, one trait per entity kind.
//!
//! `save` is an upsert: it returns the persisted form of the record.
//! Lookup misses are `Ok(None)`; turning a miss into a `NotFound` error is
//! the service layer's call, not the store's.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::certificate::{Certificate, CertificateTemplate};
use crate::models::checkin::Checkin;
use crate::models::event::{DateRange, Event, EventParticipant};
use crate::models::location::Location;
use crate::models::user::User;

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Event>>;
    async fn find_all_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>>;
    async fn save(&self, event: Event) -> Result<Event>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn save(&self, user: User) -> Result<User>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Location>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>>;
    async fn save(&self, location: Location) -> Result<Location>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait DateRangeStore: Send + Sync {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<DateRange>>;
    async fn save(&self, range: DateRange) -> Result<DateRange>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait CertificateStore: Send + Sync {
    async fn find_by_event(&self, event_id: Uuid) -> Result<Option<Certificate>>;
    async fn save(&self, certificate: Certificate) -> Result<Certificate>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait CertificateTemplateStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<CertificateTemplate>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CertificateTemplate>>;
    async fn save(&self, template: CertificateTemplate) -> Result<CertificateTemplate>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait ParticipantStore: Send + Sync {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<EventParticipant>>;
    async fn save(&self, link: EventParticipant) -> Result<EventParticipant>;
    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait CheckinStore: Send + Sync {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<Checkin>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Checkin>>;
    async fn save(&self, checkin: Checkin) -> Result<Checkin>;
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
}
