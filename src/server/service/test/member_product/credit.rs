use super::*;

/// Tests restoring a session to a USED_UP pass.
///
/// Expected: balance 1, status back to ACTIVE, ADJUST entry of +1
#[tokio::test]
async fn reactivates_used_up_pass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pass = issue_pass(db, 1).await?;
    let service = MemberProductService::new(db);
    service.deduct(pass.id, LedgerChange::new(1)).await?;

    let (pass, entry) = service
        .credit(pass.id, LedgerChange::new(1).links(LedgerLinks::booking(7)))
        .await?;

    assert_eq!(pass.remaining_count, Some(1));
    assert_eq!(pass.status, MemberProductStatus::Active);
    assert_eq!(entry.kind, LedgerKind::Adjust);
    assert_eq!(entry.change_amount, 1);
    assert_eq!(entry.links.booking_id, Some(7));
    assert_ledger_consistent(db, pass.id).await?;

    Ok(())
}

/// Tests a credit that would exceed the total count.
///
/// Expected: balance capped at total and the entry records the applied amount
#[tokio::test]
async fn caps_at_total_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pass = issue_pass(db, 5).await?;
    let service = MemberProductService::new(db);
    service.deduct(pass.id, LedgerChange::new(1)).await?;

    let (pass, entry) = service.credit(pass.id, LedgerChange::new(3)).await?;

    assert_eq!(pass.remaining_count, Some(5));
    assert_eq!(entry.change_amount, 1);
    assert_ledger_consistent(db, pass.id).await?;

    Ok(())
}

/// Tests crediting an EXPIRED pass.
///
/// Expected: balance restored but status stays EXPIRED
#[tokio::test]
async fn expired_pass_stays_expired() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let pass = MemberProductFactory::new(db, member.id, product.id)
        .counts(10, 4)
        .status(MemberProductStatus::Expired)
        .build()
        .await?;

    let (pass, _) = MemberProductService::new(db)
        .credit(pass.id, LedgerChange::new(1))
        .await?;

    assert_eq!(pass.remaining_count, Some(5));
    assert_eq!(pass.status, MemberProductStatus::Expired);

    Ok(())
}
