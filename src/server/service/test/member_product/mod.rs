use crate::server::{
    config::Defaults,
    error::AppError,
    model::member_product::{
        LedgerChange, LedgerLinks, MemberProduct, PurchaseParams, UpdateMemberProductParams,
    },
    service::member_product::MemberProductService,
};
use chrono::{Duration, Utc};
use entity::{
    member::MemberStatus, member_product::MemberProductStatus,
    member_product_history::LedgerKind, product::ProductType,
};
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, member::MemberFactory, member_product::MemberProductFactory,
        product::ProductFactory,
    },
};

mod adjust;
mod credit;
mod update;

fn purchase_params(member_id: i32, product_id: i32) -> PurchaseParams {
    PurchaseParams {
        member_id,
        product_id,
        coach_id: None,
        starts_on: None,
        total_count: None,
        payment_id: None,
        created_by: Some("front".to_string()),
    }
}

/// Issues a counted pass through the service so its CHARGE entry exists.
async fn issue_pass(db: &DatabaseConnection, total: i32) -> Result<MemberProduct, AppError> {
    let member = factory::create_member(db).await?;
    let product = ProductFactory::new(db).count_pass(total).build().await?;

    MemberProductService::new(db)
        .purchase(purchase_params(member.id, product.id), &Defaults::default())
        .await
}

/// Checks that the ledger sums to the stored balance and that the newest
/// entry's `remaining_after` equals it.
async fn assert_ledger_consistent(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let service = MemberProductService::new(db);

    let check = service.verify(id).await?;
    assert!(check.is_consistent(), "ledger mismatch: {:?}", check);

    let pass = service.get(id).await?;
    let history = service.history(id).await?;
    assert_eq!(
        history.last().and_then(|entry| entry.remaining_after),
        pass.remaining_count
    );

    Ok(())
}
