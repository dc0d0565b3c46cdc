use chrono::{DateTime, NaiveDate, Utc};
use entity::payment::{PaymentCategory, PaymentMethod, PaymentStatus};

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto, PaymentListQuery, PaymentSummaryDto, RefundDto},
    server::config::Defaults,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub member_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub product_id: Option<i32>,
    pub member_product_id: Option<i32>,
    pub amount: i64,
    pub refunded_amount: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub category: PaymentCategory,
    pub paid_at: DateTime<Utc>,
    pub refund_reason: Option<String>,
    pub refund_approved_by: Option<String>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub memo: Option<String>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            booking_id: entity.booking_id,
            product_id: entity.product_id,
            member_product_id: entity.member_product_id,
            amount: entity.amount,
            refunded_amount: entity.refunded_amount,
            method: entity.method,
            status: entity.status,
            category: entity.category,
            paid_at: entity.paid_at,
            refund_reason: entity.refund_reason,
            refund_approved_by: entity.refund_approved_by,
            refunded_at: entity.refunded_at,
            memo: entity.memo,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            member_id: self.member_id,
            booking_id: self.booking_id,
            product_id: self.product_id,
            member_product_id: self.member_product_id,
            amount: self.amount,
            refunded_amount: self.refunded_amount,
            method: self.method,
            status: self.status,
            category: self.category,
            paid_at: self.paid_at,
            refund_reason: self.refund_reason,
            refund_approved_by: self.refund_approved_by,
            refunded_at: self.refunded_at,
            memo: self.memo,
        }
    }

    /// Amount still available for refunds.
    pub fn refundable(&self) -> i64 {
        self.amount - self.refunded_amount
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub member_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub product_id: Option<i32>,
    pub amount: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub category: PaymentCategory,
    pub paid_at: Option<DateTime<Utc>>,
    pub coach_id: Option<i32>,
    pub starts_on: Option<NaiveDate>,
    pub memo: Option<String>,
    pub created_by: Option<String>,
}

impl CreatePaymentParams {
    /// Missing method, status and category come from the configured defaults.
    pub fn from_dto(dto: CreatePaymentDto, defaults: &Defaults, created_by: Option<String>) -> Self {
        Self {
            member_id: dto.member_id,
            booking_id: dto.booking_id,
            product_id: dto.product_id,
            amount: dto.amount,
            method: dto.method.unwrap_or(defaults.payment_method),
            status: dto.status.unwrap_or(defaults.payment_status),
            category: dto.category.unwrap_or(defaults.payment_category),
            paid_at: dto.paid_at,
            coach_id: dto.coach_id,
            starts_on: dto.starts_on,
            memo: dto.memo,
            created_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefundParams {
    pub amount: i64,
    pub reason: String,
    pub approver: Option<String>,
    pub revoke_count: Option<i32>,
}

impl RefundParams {
    pub fn from_dto(dto: RefundDto, approver: Option<String>) -> Self {
        Self {
            amount: dto.amount,
            reason: dto.reason,
            approver,
            revoke_count: dto.revoke_count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub member_id: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
}

impl PaymentFilter {
    pub fn from_query(query: PaymentListQuery) -> Self {
        Self {
            member_id: query.member_id,
            from: query.from,
            to: query.to,
            status: query.status,
        }
    }
}

/// Totals over payments in a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentSummary {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub count: u64,
    pub paid: i64,
    pub refunded: i64,
}

impl PaymentSummary {
    pub fn into_dto(self) -> PaymentSummaryDto {
        PaymentSummaryDto {
            from: self.from,
            to: self.to,
            count: self.count,
            paid: self.paid,
            refunded: self.refunded,
            net: self.paid - self.refunded,
        }
    }
}
