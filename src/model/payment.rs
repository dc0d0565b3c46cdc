use chrono::{DateTime, NaiveDate, Utc};
use entity::payment::{PaymentCategory, PaymentMethod, PaymentStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub member_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub product_id: Option<i32>,
    /// Pass issued by this payment, if any.
    pub member_product_id: Option<i32>,
    pub amount: i64,
    pub refunded_amount: i64,
    #[schema(value_type = String, example = "CARD")]
    pub method: PaymentMethod,
    #[schema(value_type = String, example = "COMPLETED")]
    pub status: PaymentStatus,
    #[schema(value_type = String, example = "PRODUCT")]
    pub category: PaymentCategory,
    pub paid_at: DateTime<Utc>,
    pub refund_reason: Option<String>,
    pub refund_approved_by: Option<String>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub memo: Option<String>,
}

/// Record a payment. A COMPLETED payment with a member and product issues a pass.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentDto {
    pub member_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub product_id: Option<i32>,
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,
    #[schema(value_type = Option<String>)]
    pub method: Option<PaymentMethod>,
    #[schema(value_type = Option<String>)]
    pub status: Option<PaymentStatus>,
    #[schema(value_type = Option<String>)]
    pub category: Option<PaymentCategory>,
    pub paid_at: Option<DateTime<Utc>>,
    /// Coach override for the issued pass.
    pub coach_id: Option<i32>,
    /// Start date of the issued pass; defaults to today.
    pub starts_on: Option<NaiveDate>,
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefundDto {
    #[validate(range(min = 1, message = "Refund amount must be positive"))]
    pub amount: i64,
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
    /// Sessions to revoke from the issued pass.
    #[validate(range(min = 1, message = "Revoke count must be at least 1"))]
    pub revoke_count: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentListQuery {
    pub member_id: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentSummaryDto {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub count: u64,
    pub paid: i64,
    pub refunded: i64,
    pub net: i64,
}
