use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityDto {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub capacity: i32,
    pub hourly_rate: i64,
    pub active: bool,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFacilityDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Kind is required"))]
    pub kind: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    #[validate(range(min = 0, message = "Hourly rate must not be negative"))]
    pub hourly_rate: i64,
    pub active: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFacilityDto {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub kind: Option<String>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<i32>,
    #[validate(range(min = 0, message = "Hourly rate must not be negative"))]
    pub hourly_rate: Option<i64>,
    pub active: Option<bool>,
    pub description: Option<String>,
}

/// One weekday's opening hours. `day_of_week` is 1 (Monday) through 7 (Sunday).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDto {
    pub day_of_week: u8,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_open: bool,
}

/// Slot input; `day_of_week` accepts `"1"`..`"7"`, a bare integer or an English day name.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotInputDto {
    pub day_of_week: serde_json::Value,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    #[serde(default = "default_true")]
    pub is_open: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityDto {
    pub within_hours: bool,
    pub free: bool,
}
