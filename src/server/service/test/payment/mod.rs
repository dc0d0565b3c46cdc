use crate::server::{
    config::Defaults,
    error::AppError,
    model::payment::{CreatePaymentParams, RefundParams},
    service::{member_product::MemberProductService, payment::PaymentService},
};
use entity::{
    member_product_history::LedgerKind,
    payment::{PaymentCategory, PaymentMethod, PaymentStatus},
    prelude::Payment,
};
use test_utils::{builder::TestBuilder, factory::{self, product::ProductFactory}};

mod create;
mod refund;

fn payment_params(member_id: i32, product_id: i32, amount: i64) -> CreatePaymentParams {
    CreatePaymentParams {
        member_id: Some(member_id),
        booking_id: None,
        product_id: Some(product_id),
        amount,
        method: PaymentMethod::Card,
        status: PaymentStatus::Completed,
        category: PaymentCategory::Product,
        paid_at: None,
        coach_id: None,
        starts_on: None,
        memo: None,
        created_by: Some("front".to_string()),
    }
}

fn refund_params(amount: i64, revoke_count: Option<i32>) -> RefundParams {
    RefundParams {
        amount,
        reason: "Moved away".to_string(),
        approver: Some("manager".to_string()),
        revoke_count,
    }
}
