//! In-memory stores backing the test suite.
//!
//! Rows live in insertion-ordered vectors behind an `RwLock`; `save`
//! replaces in place when the id already exists, preserving the original
//! position so `find_all` keeps insertion order.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::certificate::{Certificate, CertificateTemplate};
use crate::models::checkin::Checkin;
use crate::models::event::{DateRange, Event, EventParticipant};
use crate::models::location::Location;
use crate::models::user::User;
use crate::store::{
    CertificateStore, CertificateTemplateStore, CheckinStore, DateRangeStore, EventStore,
    LocationStore, ParticipantStore, UserStore,
};

#[derive(Default)]
pub struct MemoryEventStore {
    rows: RwLock<Vec<Event>>,
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn find_all(&self) -> Result<Vec<Event>> {
        Ok(self.rows.read().unwrap().clone())
    }

    async fn find_all_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|event| event.organizer_id == organizer_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|event| event.id == id)
            .cloned())
    }

    async fn save(&self, event: Event) -> Result<Event> {
        let mut rows = self.rows.write().unwrap();
        match rows.iter_mut().find(|row| row.id == event.id) {
            Some(row) => *row = event.clone(),
            None => rows.push(event.clone()),
        }
        Ok(event)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.rows.write().unwrap().retain(|event| event.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    rows: RwLock<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.rows.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn save(&self, user: User) -> Result<User> {
        let mut rows = self.rows.write().unwrap();
        match rows.iter_mut().find(|row| row.id == user.id) {
            Some(row) => *row = user.clone(),
            None => rows.push(user.clone()),
        }
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.rows.write().unwrap().retain(|user| user.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryLocationStore {
    rows: RwLock<Vec<Location>>,
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn find_all(&self) -> Result<Vec<Location>> {
        Ok(self.rows.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|location| location.id == id)
            .cloned())
    }

    async fn save(&self, location: Location) -> Result<Location> {
        let mut rows = self.rows.write().unwrap();
        match rows.iter_mut().find(|row| row.id == location.id) {
            Some(row) => *row = location.clone(),
            None => rows.push(location.clone()),
        }
        Ok(location)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.rows
            .write()
            .unwrap()
            .retain(|location| location.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryDateRangeStore {
    rows: RwLock<Vec<DateRange>>,
}

#[async_trait]
impl DateRangeStore for MemoryDateRangeStore {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<DateRange>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|range| range.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn save(&self, range: DateRange) -> Result<DateRange> {
        let mut rows = self.rows.write().unwrap();
        match rows.iter_mut().find(|row| row.id == range.id) {
            Some(row) => *row = range.clone(),
            None => rows.push(range.clone()),
        }
        Ok(range)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.rows.write().unwrap().retain(|range| range.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCertificateStore {
    rows: RwLock<Vec<Certificate>>,
}

#[async_trait]
impl CertificateStore for MemoryCertificateStore {
    async fn find_by_event(&self, event_id: Uuid) -> Result<Option<Certificate>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|certificate| certificate.event_id == event_id)
            .cloned())
    }

    async fn save(&self, certificate: Certificate) -> Result<Certificate> {
        let mut rows = self.rows.write().unwrap();
        match rows.iter_mut().find(|row| row.id == certificate.id) {
            Some(row) => *row = certificate.clone(),
            None => rows.push(certificate.clone()),
        }
        Ok(certificate)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.rows
            .write()
            .unwrap()
            .retain(|certificate| certificate.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCertificateTemplateStore {
    rows: RwLock<Vec<CertificateTemplate>>,
}

#[async_trait]
impl CertificateTemplateStore for MemoryCertificateTemplateStore {
    async fn find_all(&self) -> Result<Vec<CertificateTemplate>> {
        Ok(self.rows.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CertificateTemplate>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|template| template.id == id)
            .cloned())
    }

    async fn save(&self, template: CertificateTemplate) -> Result<CertificateTemplate> {
        let mut rows = self.rows.write().unwrap();
        match rows.iter_mut().find(|row| row.id == template.id) {
            Some(row) => *row = template.clone(),
            None => rows.push(template.clone()),
        }
        Ok(template)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.rows
            .write()
            .unwrap()
            .retain(|template| template.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryParticipantStore {
    rows: RwLock<Vec<EventParticipant>>,
}

#[async_trait]
impl ParticipantStore for MemoryParticipantStore {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<EventParticipant>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|link| link.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn save(&self, link: EventParticipant) -> Result<EventParticipant> {
        let mut rows = self.rows.write().unwrap();
        let exists = rows
            .iter()
            .any(|row| row.event_id == link.event_id && row.user_id == link.user_id);
        if !exists {
            rows.push(link.clone());
        }
        Ok(link)
    }

    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> Result<()> {
        self.rows
            .write()
            .unwrap()
            .retain(|link| !(link.event_id == event_id && link.user_id == user_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCheckinStore {
    rows: RwLock<Vec<Checkin>>,
}

#[async_trait]
impl CheckinStore for MemoryCheckinStore {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<Checkin>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|checkin| checkin.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Checkin>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|checkin| checkin.id == id)
            .cloned())
    }

    async fn save(&self, checkin: Checkin) -> Result<Checkin> {
        let mut rows = self.rows.write().unwrap();
        match rows.iter_mut().find(|row| row.id == checkin.id) {
            Some(row) => *row = checkin.clone(),
            None => rows.push(checkin.clone()),
        }
        Ok(checkin)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.rows.write().unwrap().retain(|checkin| checkin.id != id);
        Ok(())
    }
}
