use chrono::{DateTime, NaiveDate, Utc};
use entity::member::{Grade, MemberStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{api::double_option, member_product::MemberProductDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub id: i32,
    pub member_number: String,
    pub registration_seq: i32,
    pub name: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub batting_hand: Option<String>,
    pub throwing_hand: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub guardian_phone: Option<String>,
    pub grade: Grade,
    pub status: MemberStatus,
    pub coach_id: Option<i32>,
    pub memo: Option<String>,
    pub joined_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberDto {
    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    #[validate(range(min = 0.0, max = 250.0))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 0.0, max = 300.0))]
    pub weight_kg: Option<f64>,
    pub batting_hand: Option<String>,
    pub throwing_hand: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub guardian_phone: Option<String>,
    pub grade: Option<Grade>,
    pub coach_id: Option<i32>,
    pub memo: Option<String>,
    pub joined_on: Option<NaiveDate>,
}

/// Partial update; absent fields are left untouched.
///
/// With `backdate_only` set, only `joined_on` is applied.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMemberDto {
    #[validate(length(min = 1, max = 50, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Phone must not be empty"))]
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    #[validate(range(min = 0.0, max = 250.0))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 0.0, max = 300.0))]
    pub weight_kg: Option<f64>,
    pub batting_hand: Option<String>,
    pub throwing_hand: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub guardian_phone: Option<String>,
    pub grade: Option<Grade>,
    pub status: Option<MemberStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub coach_id: Option<Option<i32>>,
    pub memo: Option<String>,
    pub joined_on: Option<NaiveDate>,
    #[serde(default)]
    pub backdate_only: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberSearchQuery {
    /// Substring matched against name, phone and member number.
    pub q: Option<String>,
    pub grade: Option<Grade>,
    pub status: Option<MemberStatus>,
    pub coach_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "crate::model::api::default_entries")]
    pub entries: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberSummaryDto {
    pub member: MemberDto,
    pub active_passes: Vec<MemberProductDto>,
    pub total_remaining: i32,
}
