use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachDto {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub active: bool,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCoachDto {
    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub active: Option<bool>,
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCoachDto {
    #[validate(length(min = 1, max = 50, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub active: Option<bool>,
    pub memo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentCountDto {
    pub coach_id: i32,
    pub count: usize,
}
