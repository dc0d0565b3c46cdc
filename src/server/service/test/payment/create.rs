use super::*;

/// Tests a completed product payment.
///
/// Expected: pass issued with a CHARGE entry linked to the payment
#[tokio::test]
async fn completed_payment_issues_pass() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = ProductFactory::new(db).count_pass(10).build().await?;

    let payment = PaymentService::new(db)
        .create(payment_params(member.id, product.id, 200_000), &Defaults::default())
        .await?;

    let pass_id = payment.member_product_id.expect("pass issued");
    let passes = MemberProductService::new(db);
    let pass = passes.get(pass_id).await?;
    assert_eq!(pass.member_id, member.id);
    assert_eq!(pass.remaining_count, Some(10));
    let history = passes.history(pass_id).await?;
    assert_eq!(history[0].kind, LedgerKind::Charge);
    assert_eq!(history[0].links.payment_id, Some(payment.id));

    let stored = PaymentService::new(db).get(payment.id).await?;
    assert_eq!(stored.member_product_id, Some(pass_id));

    Ok(())
}

/// Tests a payment that is still pending.
///
/// Expected: no pass issued
#[tokio::test]
async fn pending_payment_issues_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;

    let mut param = payment_params(member.id, product.id, 50_000);
    param.status = PaymentStatus::Pending;
    let payment = PaymentService::new(db)
        .create(param, &Defaults::default())
        .await?;

    assert_eq!(payment.member_product_id, None);
    assert!(MemberProductService::new(db)
        .list_by_member(member.id, None)
        .await?
        .is_empty());

    Ok(())
}

/// Tests a zero amount.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;

    let result = PaymentService::new(db)
        .create(payment_params(member.id, product.id, 0), &Defaults::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests cancelling pending and completed payments.
///
/// Expected: PENDING becomes CANCELLED, COMPLETED is refused
#[tokio::test]
async fn cancel_only_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let service = PaymentService::new(db);

    let mut pending = payment_params(member.id, product.id, 10_000);
    pending.status = PaymentStatus::Pending;
    let pending = service.create(pending, &Defaults::default()).await?;
    let completed = service
        .create(payment_params(member.id, product.id, 10_000), &Defaults::default())
        .await?;

    let cancelled = service.cancel(pending.id).await?;
    let refused = service.cancel(completed.id).await;

    assert_eq!(cancelled.status, PaymentStatus::Cancelled);
    assert!(matches!(refused, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the revenue summary.
///
/// Expected: pending payments excluded, refunds summed separately
#[tokio::test]
async fn summary_counts_settled_payments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let service = PaymentService::new(db);

    let paid = service
        .create(payment_params(member.id, product.id, 100_000), &Defaults::default())
        .await?;
    service
        .create(payment_params(member.id, product.id, 50_000), &Defaults::default())
        .await?;
    let mut pending = payment_params(member.id, product.id, 70_000);
    pending.status = PaymentStatus::Pending;
    service.create(pending, &Defaults::default()).await?;
    service.refund(paid.id, refund_params(30_000, None)).await?;

    let summary = service.summary(None, None).await?;

    assert_eq!(summary.count, 2);
    assert_eq!(summary.paid, 150_000);
    assert_eq!(summary.refunded, 30_000);

    Ok(())
}
