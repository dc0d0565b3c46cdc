use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub member_id: i32,
    pub booking_id: Option<i32>,
    pub member_product_id: Option<i32>,
    pub attendance_date: NaiveDate,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckInDto {
    pub member_id: i32,
    pub booking_id: Option<i32>,
    /// Pass to charge; falls back to the booking's pass.
    pub member_product_id: Option<i32>,
    #[validate(length(max = 500))]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceListQuery {
    pub member_id: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
