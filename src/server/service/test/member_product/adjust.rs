use super::*;

/// Tests a manual correction of the balance.
///
/// Expected: new balance stored with an ADJUST entry carrying the delta
#[tokio::test]
async fn records_delta() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pass = issue_pass(db, 10).await?;

    let (pass, entry) = MemberProductService::new(db)
        .adjust(pass.id, 7, LedgerChange::new(0).description("Counted wrong"))
        .await?;

    assert_eq!(pass.remaining_count, Some(7));
    assert_eq!(entry.kind, LedgerKind::Adjust);
    assert_eq!(entry.change_amount, -3);
    assert_eq!(entry.remaining_after, Some(7));
    assert_ledger_consistent(db, pass.id).await?;

    Ok(())
}

/// Tests adjusting to zero and back.
///
/// Expected: USED_UP at zero, ACTIVE again afterwards
#[tokio::test]
async fn zero_marks_used_up() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pass = issue_pass(db, 3).await?;
    let service = MemberProductService::new(db);

    let (used_up, _) = service.adjust(pass.id, 0, LedgerChange::new(0)).await?;
    assert_eq!(used_up.status, MemberProductStatus::UsedUp);

    let (active, _) = service.adjust(pass.id, 2, LedgerChange::new(0)).await?;
    assert_eq!(active.status, MemberProductStatus::Active);
    assert_ledger_consistent(db, pass.id).await?;

    Ok(())
}

/// Tests values outside `[0, total]`.
///
/// Expected: Err(BadRequest) for both bounds
#[tokio::test]
async fn rejects_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pass = issue_pass(db, 4).await?;
    let service = MemberProductService::new(db);

    let above = service.adjust(pass.id, 5, LedgerChange::new(0)).await;
    let below = service.adjust(pass.id, -1, LedgerChange::new(0)).await;

    assert!(matches!(above, Err(AppError::BadRequest(_))));
    assert!(matches!(below, Err(AppError::BadRequest(_))));
    assert_eq!(service.fresh_remaining(pass.id).await?, Some(4));

    Ok(())
}

/// Tests adjusting an uncounted pass.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_uncounted_pass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let pass = MemberProductFactory::new(db, member.id, product.id)
        .uncounted()
        .build()
        .await?;

    let result = MemberProductService::new(db)
        .adjust(pass.id, 1, LedgerChange::new(0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
