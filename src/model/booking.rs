use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::booking::{BookingPurpose, BookingStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub facility_id: i32,
    pub member_id: Option<i32>,
    pub coach_id: Option<i32>,
    pub member_product_id: Option<i32>,
    #[schema(value_type = String, example = "LESSON")]
    pub purpose: BookingPurpose,
    #[schema(value_type = String, example = "PENDING")]
    pub status: BookingStatus,
    pub booking_date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "11:00:00")]
    pub end_time: NaiveTime,
    pub participants: i32,
    pub product_deducted: bool,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingDto {
    pub facility_id: i32,
    pub member_id: Option<i32>,
    pub coach_id: Option<i32>,
    /// Pass charged one session when the booking is confirmed.
    pub member_product_id: Option<i32>,
    #[schema(value_type = String, example = "LESSON")]
    pub purpose: BookingPurpose,
    pub booking_date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "11:00:00")]
    pub end_time: NaiveTime,
    #[validate(range(min = 1, message = "Participants must be at least 1"))]
    pub participants: Option<i32>,
    pub memo: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingDto {
    pub booking_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>)]
    pub end_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "crate::model::api::double_option")]
    #[schema(value_type = Option<i32>)]
    pub coach_id: Option<Option<i32>>,
    #[validate(range(min = 1, message = "Participants must be at least 1"))]
    pub participants: Option<i32>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub facility_id: Option<i32>,
    pub member_id: Option<i32>,
    pub coach_id: Option<i32>,
    pub status: Option<BookingStatus>,
}
