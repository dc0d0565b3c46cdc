use chrono::{DateTime, Utc};
use entity::user::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::api::double_option;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
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

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
    /// `Some(None)` unlinks the coach.
    #[serde(default, deserialize_with = "double_option")]
    pub coach_id: Option<Option<i32>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordDto {
    pub current_password: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}
