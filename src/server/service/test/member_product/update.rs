use super::*;

/// Tests extending the expiry date of an EXPIRED pass.
///
/// Expected: status back to ACTIVE with the new date
#[tokio::test]
async fn extension_reactivates_expired_pass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let today = Utc::now().date_naive();
    let pass = MemberProductFactory::new(db, member.id, product.id)
        .expires_on(Some(today - Duration::days(3)))
        .status(MemberProductStatus::Expired)
        .build()
        .await?;

    let new_expiry = today + Duration::days(30);
    let updated = MemberProductService::new(db)
        .update(
            pass.id,
            UpdateMemberProductParams {
                expires_on: Some(new_expiry),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.expires_on, Some(new_expiry));
    assert_eq!(updated.status, MemberProductStatus::Active);

    Ok(())
}

/// Tests that the overdue sweep only touches ACTIVE passes past expiry.
///
/// Expected: one pass expired, the current one untouched
#[tokio::test]
async fn expire_overdue_sweeps_past_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let today = Utc::now().date_naive();
    let overdue = MemberProductFactory::new(db, member.id, product.id)
        .expires_on(Some(today - Duration::days(1)))
        .build()
        .await?;
    let current = MemberProductFactory::new(db, member.id, product.id)
        .expires_on(Some(today))
        .build()
        .await?;

    let service = MemberProductService::new(db);
    let expired = service.expire_overdue(today).await?;

    assert_eq!(expired, 1);
    assert_eq!(
        service.get(overdue.id).await?.status,
        MemberProductStatus::Expired
    );
    assert_eq!(
        service.get(current.id).await?.status,
        MemberProductStatus::Active
    );

    Ok(())
}
