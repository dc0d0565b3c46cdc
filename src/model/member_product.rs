use chrono::{DateTime, NaiveDate, Utc};
use entity::{member_product::MemberProductStatus, member_product_history::LedgerKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An issued pass and its current balance.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberProductDto {
    pub id: i32,
    pub member_id: i32,
    pub product_id: i32,
    pub coach_id: Option<i32>,
    /// `null` for uncounted time passes.
    pub total_count: Option<i32>,
    /// `null` for uncounted time passes.
    pub remaining_count: Option<i32>,
    pub purchased_at: DateTime<Utc>,
    pub starts_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: MemberProductStatus,
}

/// Issue a pass to a member.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseDto {
    pub member_id: i32,
    pub product_id: i32,
    /// Overrides the product's default coach for this pass.
    pub coach_id: Option<i32>,
    /// Defaults to today.
    pub starts_on: Option<NaiveDate>,
    /// Overrides the product's usage count.
    #[validate(range(min = 1, message = "Count must be at least 1"))]
    pub total_count: Option<i32>,
    pub payment_id: Option<i32>,
}

/// Consume sessions from a pass.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeductDto {
    #[serde(default = "one")]
    #[validate(range(min = 1, message = "Amount must be at least 1"))]
    pub amount: i32,
    pub attendance_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub description: Option<String>,
}

/// Restore sessions to a pass.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreditDto {
    #[serde(default = "one")]
    #[validate(range(min = 1, message = "Amount must be at least 1"))]
    pub amount: i32,
    pub attendance_id: Option<i32>,
    pub booking_id: Option<i32>,
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
}

/// Manually set the remaining count.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdjustDto {
    #[validate(range(min = 0, message = "Remaining count must not be negative"))]
    pub remaining_count: i32,
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMemberProductDto {
    #[serde(default, deserialize_with = "crate::model::api::double_option")]
    #[schema(value_type = Option<i32>)]
    pub coach_id: Option<Option<i32>>,
    pub expires_on: Option<NaiveDate>,
}

/// One immutable ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryDto {
    pub id: i32,
    pub member_product_id: i32,
    pub member_id: i32,
    #[schema(value_type = String, example = "DEDUCT")]
    pub kind: LedgerKind,
    pub change_amount: i32,
    pub remaining_after: Option<i32>,
    pub attendance_id: Option<i32>,
    pub payment_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A pass after a balance change together with the entry that recorded it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LedgerWriteDto {
    pub pass: MemberProductDto,
    pub entry: HistoryDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RemainingDto {
    pub member_product_id: i32,
    pub remaining_count: Option<i32>,
}

/// Result of comparing the ledger sum with the stored balance.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LedgerCheckDto {
    pub member_product_id: i32,
    pub stored_remaining: Option<i32>,
    pub ledger_sum: i64,
    pub consistent: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpireResultDto {
    pub expired: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberProductListQuery {
    pub status: Option<MemberProductStatus>,
}

fn one() -> i32 {
    1
}
