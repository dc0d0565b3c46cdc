use crate::server::{
    config::Defaults,
    data::payment::{PaymentRepository, RefundUpdate},
    model::payment::{CreatePaymentParams, PaymentFilter},
};
use chrono::{TimeZone, Utc};
use entity::payment::{PaymentCategory, PaymentMethod, PaymentStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_refund;
mod find_settled_in_range;
mod list;

fn params(member_id: Option<i32>, amount: i64, status: PaymentStatus) -> CreatePaymentParams {
    let defaults = Defaults::default();
    CreatePaymentParams {
        member_id,
        booking_id: None,
        product_id: None,
        amount,
        method: defaults.payment_method,
        status,
        category: defaults.payment_category,
        paid_at: None,
        coach_id: None,
        starts_on: None,
        memo: None,
        created_by: None,
    }
}

fn at(month: u32, day: u32, hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, hour, 0, 0).unwrap()
}
