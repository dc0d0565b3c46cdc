//! Staff account domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::model::user::{UpdateUserDto, UserDto};

/// A staff account. The password hash never leaves the data layer through this type.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub approved: bool,
    pub active: bool,
    pub coach_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            role: entity.role,
            approved: entity.approved,
            active: entity.active,
            coach_id: entity.coach_id,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            name: self.name,
            role: self.role,
            approved: self.approved,
            active: self.active,
            coach_id: self.coach_id,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Parameters for inserting an account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub approved: bool,
}

/// Partial update of an account; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
    pub coach_id: Option<Option<i32>>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            role: dto.role,
            active: dto.active,
            coach_id: dto.coach_id,
        }
    }
}
