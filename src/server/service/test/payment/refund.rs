use super::*;

/// Tests a partial then a full refund.
///
/// Expected: PARTIALLY_REFUNDED, then REFUNDED
#[tokio::test]
async fn partial_then_full() -> Result<(), AppError> {
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
    let payment = service
        .create(payment_params(member.id, product.id, 100_000), &Defaults::default())
        .await?;

    let partial = service.refund(payment.id, refund_params(40_000, None)).await?;
    assert_eq!(partial.status, PaymentStatus::PartiallyRefunded);
    assert_eq!(partial.refunded_amount, 40_000);

    let full = service.refund(payment.id, refund_params(60_000, None)).await?;
    assert_eq!(full.status, PaymentStatus::Refunded);
    assert_eq!(full.refunded_amount, 100_000);

    Ok(())
}

/// Tests refunding more than was paid.
///
/// Expected: Err(BadRequest) and nothing recorded
#[tokio::test]
async fn rejects_over_refund() -> Result<(), AppError> {
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
    let payment = service
        .create(payment_params(member.id, product.id, 100_000), &Defaults::default())
        .await?;

    let result = service.refund(payment.id, refund_params(100_001, None)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(payment.id).await?.refunded_amount, 0);

    Ok(())
}

/// Tests a refund that takes sessions back from the issued pass.
///
/// Expected: sessions revoked, bounded by what remains, with the payment linked
#[tokio::test]
async fn revokes_sessions_within_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = ProductFactory::new(db).count_pass(5).build().await?;
    let service = PaymentService::new(db);
    let payment = service
        .create(payment_params(member.id, product.id, 100_000), &Defaults::default())
        .await?;
    let pass_id = payment.member_product_id.expect("pass issued");

    service
        .refund(payment.id, refund_params(100_000, Some(8)))
        .await?;

    let passes = MemberProductService::new(db);
    assert_eq!(passes.fresh_remaining(pass_id).await?, Some(0));
    let history = passes.history(pass_id).await?;
    let revoke = history.last().expect("revoke entry");
    assert_eq!(revoke.kind, LedgerKind::Adjust);
    assert_eq!(revoke.change_amount, -5);
    assert_eq!(revoke.links.payment_id, Some(payment.id));
    assert!(passes.verify(pass_id).await?.is_consistent());

    Ok(())
}

/// Tests refunding a cancelled payment.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_cancelled_payment() -> Result<(), AppError> {
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
    let mut param = payment_params(member.id, product.id, 10_000);
    param.status = PaymentStatus::Pending;
    let payment = service.create(param, &Defaults::default()).await?;
    service.cancel(payment.id).await?;

    let result = service.refund(payment.id, refund_params(10_000, None)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
