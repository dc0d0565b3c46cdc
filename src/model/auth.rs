use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{permission::PermissionDto, user::UserDto};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDto {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub role: entity::user::Role,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InitAdminDto {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateTokenDto {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub token: String,
    pub user: UserDto,
}

/// The authenticated caller together with the effective permission matrix.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrincipalDto {
    pub user: UserDto,
    pub permissions: Vec<PermissionDto>,
}
