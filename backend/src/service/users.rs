use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::user::{User, UserDto};
use crate::store::UserStore;

pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn list_as_dto(&self) -> Result<Vec<UserDto>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    pub async fn find_by_id_as_dto(&self, id: Uuid) -> Result<UserDto> {
        Ok(UserDto::from(self.find_by_id(id).await?))
    }

    pub async fn create(&self, dto: UserDto) -> Result<UserDto> {
        dto.validate()?;
        let saved = self.users.save(User::from(dto)).await?;
        Ok(UserDto::from(saved))
    }

    pub async fn update(&self, id: Uuid, dto: UserDto) -> Result<UserDto> {
        dto.validate()?;
        let mut user = self.find_by_id(id).await?;
        user.overlay(dto);
        let saved = self.users.save(user).await?;
        Ok(UserDto::from(saved))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.find_by_id(id).await?;
        self.users.delete_by_id(id).await
    }
}
