//! Postgres-backed stores.
//!
//! Runtime query API throughout (`sqlx::query_as::<_, T>` + binds) so the
//! crate builds without a reachable database.

use async_trait::async_trait;
use sqlx::PgPool;
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

/// Column list for `events` SELECT/RETURNING clauses.
const EVENT_COLUMNS: &str = "\
    id, name, description, starts_at, ends_at, \
    location_id, organizer_id, background_image_url, created_at";

const USER_COLUMNS: &str = "id, name, email, created_at";
const LOCATION_COLUMNS: &str = "id, auditorium, created_at";
const DATE_RANGE_COLUMNS: &str = "id, event_id, starts_at, ends_at";
const CERTIFICATE_COLUMNS: &str = "id, event_id, template_id";
const TEMPLATE_COLUMNS: &str = "id, name, background_url, created_at";
const CHECKIN_COLUMNS: &str = "id, event_id, user_id, checked_in_at";

pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn find_all(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    async fn find_all_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE organizer_id = $1 ORDER BY created_at"
        ))
        .bind(organizer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn save(&self, event: Event) -> Result<Event> {
        let saved = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events ({EVENT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 description = EXCLUDED.description, \
                 starts_at = EXCLUDED.starts_at, \
                 ends_at = EXCLUDED.ends_at, \
                 location_id = EXCLUDED.location_id, \
                 organizer_id = EXCLUDED.organizer_id, \
                 background_image_url = EXCLUDED.background_image_url \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.location_id)
        .bind(event.organizer_id)
        .bind(&event.background_image_url)
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    async fn save(&self, user: User) -> Result<User> {
        let saved = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users ({USER_COLUMNS}) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, email = EXCLUDED.email \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for PgLocationStore {
    async fn find_all(&self) -> Result<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>> {
        let location = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(location)
    }

    async fn save(&self, location: Location) -> Result<Location> {
        let saved = sqlx::query_as::<_, Location>(&format!(
            "INSERT INTO locations ({LOCATION_COLUMNS}) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET auditorium = EXCLUDED.auditorium \
             RETURNING {LOCATION_COLUMNS}"
        ))
        .bind(location.id)
        .bind(&location.auditorium)
        .bind(location.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

pub struct PgDateRangeStore {
    pool: PgPool,
}

impl PgDateRangeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DateRangeStore for PgDateRangeStore {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<DateRange>> {
        let ranges = sqlx::query_as::<_, DateRange>(&format!(
            "SELECT {DATE_RANGE_COLUMNS} FROM date_ranges WHERE event_id = $1 ORDER BY starts_at"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ranges)
    }

    async fn save(&self, range: DateRange) -> Result<DateRange> {
        let saved = sqlx::query_as::<_, DateRange>(&format!(
            "INSERT INTO date_ranges ({DATE_RANGE_COLUMNS}) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET \
                 event_id = EXCLUDED.event_id, \
                 starts_at = EXCLUDED.starts_at, \
                 ends_at = EXCLUDED.ends_at \
             RETURNING {DATE_RANGE_COLUMNS}"
        ))
        .bind(range.id)
        .bind(range.event_id)
        .bind(range.starts_at)
        .bind(range.ends_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM date_ranges WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

pub struct PgCertificateStore {
    pool: PgPool,
}

impl PgCertificateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificateStore for PgCertificateStore {
    async fn find_by_event(&self, event_id: Uuid) -> Result<Option<Certificate>> {
        let certificate = sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {CERTIFICATE_COLUMNS} FROM certificates WHERE event_id = $1"
        ))
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(certificate)
    }

    async fn save(&self, certificate: Certificate) -> Result<Certificate> {
        let saved = sqlx::query_as::<_, Certificate>(&format!(
            "INSERT INTO certificates ({CERTIFICATE_COLUMNS}) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET \
                 event_id = EXCLUDED.event_id, \
                 template_id = EXCLUDED.template_id \
             RETURNING {CERTIFICATE_COLUMNS}"
        ))
        .bind(certificate.id)
        .bind(certificate.event_id)
        .bind(certificate.template_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

pub struct PgCertificateTemplateStore {
    pool: PgPool,
}

impl PgCertificateTemplateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificateTemplateStore for PgCertificateTemplateStore {
    async fn find_all(&self) -> Result<Vec<CertificateTemplate>> {
        let templates = sqlx::query_as::<_, CertificateTemplate>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM certificate_templates ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(templates)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CertificateTemplate>> {
        let template = sqlx::query_as::<_, CertificateTemplate>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM certificate_templates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(template)
    }

    async fn save(&self, template: CertificateTemplate) -> Result<CertificateTemplate> {
        let saved = sqlx::query_as::<_, CertificateTemplate>(&format!(
            "INSERT INTO certificate_templates ({TEMPLATE_COLUMNS}) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 background_url = EXCLUDED.background_url \
             RETURNING {TEMPLATE_COLUMNS}"
        ))
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.background_url)
        .bind(template.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM certificate_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

pub struct PgParticipantStore {
    pool: PgPool,
}

impl PgParticipantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantStore for PgParticipantStore {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<EventParticipant>> {
        let links = sqlx::query_as::<_, EventParticipant>(
            "SELECT event_id, user_id FROM event_participants WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    async fn save(&self, link: EventParticipant) -> Result<EventParticipant> {
        let saved = sqlx::query_as::<_, EventParticipant>(
            "INSERT INTO event_participants (event_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (event_id, user_id) DO UPDATE SET user_id = EXCLUDED.user_id \
             RETURNING event_id, user_id",
        )
        .bind(link.event_id)
        .bind(link.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM event_participants WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

pub struct PgCheckinStore {
    pool: PgPool,
}

impl PgCheckinStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckinStore for PgCheckinStore {
    async fn find_all_by_event(&self, event_id: Uuid) -> Result<Vec<Checkin>> {
        let checkins = sqlx::query_as::<_, Checkin>(&format!(
            "SELECT {CHECKIN_COLUMNS} FROM checkins WHERE event_id = $1 ORDER BY checked_in_at"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(checkins)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Checkin>> {
        let checkin = sqlx::query_as::<_, Checkin>(&format!(
            "SELECT {CHECKIN_COLUMNS} FROM checkins WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(checkin)
    }

    async fn save(&self, checkin: Checkin) -> Result<Checkin> {
        let saved = sqlx::query_as::<_, Checkin>(&format!(
            "INSERT INTO checkins ({CHECKIN_COLUMNS}) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET checked_in_at = EXCLUDED.checked_in_at \
             RETURNING {CHECKIN_COLUMNS}"
        ))
        .bind(checkin.id)
        .bind(checkin.event_id)
        .bind(checkin.user_id)
        .bind(checkin.checked_in_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM checkins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
