use super::*;

/// Tests bulk expiry of overdue ACTIVE passes.
///
/// Expected: only the ACTIVE pass past its expiry date becomes EXPIRED
#[tokio::test]
async fn expires_only_overdue_active_passes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;

    let overdue = MemberProductFactory::new(db, member.id, product.id)
        .expires_on(Some(today - Duration::days(1)))
        .build()
        .await?;
    let last_day = MemberProductFactory::new(db, member.id, product.id)
        .expires_on(Some(today))
        .build()
        .await?;
    let used_up = MemberProductFactory::new(db, member.id, product.id)
        .counts(10, 0)
        .status(MemberProductStatus::UsedUp)
        .expires_on(Some(today - Duration::days(10)))
        .build()
        .await?;
    let open_ended = MemberProductFactory::new(db, member.id, product.id)
        .expires_on(None)
        .build()
        .await?;

    let repo = MemberProductRepository::new(db);
    let expired = repo.expire_overdue(today).await?;

    assert_eq!(expired, 1);
    for (id, expected) in [
        (overdue.id, MemberProductStatus::Expired),
        (last_day.id, MemberProductStatus::Active),
        (used_up.id, MemberProductStatus::UsedUp),
        (open_ended.id, MemberProductStatus::Active),
    ] {
        let pass = repo.find_by_id(id).await?.unwrap();
        assert_eq!(pass.status, expected);
    }

    Ok(())
}

/// Tests expiring a single pass.
///
/// Expected: Ok(true) for an overdue pass, Ok(false) once already expired
#[tokio::test]
async fn expire_if_overdue_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let pass = MemberProductFactory::new(db, member.id, product.id)
        .expires_on(Some(today - Duration::days(3)))
        .build()
        .await?;

    let repo = MemberProductRepository::new(db);

    assert!(repo.expire_if_overdue(pass.id, today).await?);
    assert!(!repo.expire_if_overdue(pass.id, today).await?);

    Ok(())
}
