use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

/// Full user record as stored in the database. Users double as event
/// organizers and as participants.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Wire shape of a user. Every field is optional; absent fields are
/// preserved on overlay updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            name: Some(user.name),
            email: Some(user.email),
            created_at: Some(user.created_at),
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            created_at: dto.created_at.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}

impl User {
    /// Overwrite each field present in the incoming dto; absent fields keep
    /// their current value.
    pub fn overlay(&mut self, dto: UserDto) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(email) = dto.email {
            self.email = email;
        }
    }
}
