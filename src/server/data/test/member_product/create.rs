use super::*;

/// Tests that a new pass starts ACTIVE with its full balance.
///
/// Expected: remaining equals total, status ACTIVE
#[tokio::test]
async fn starts_active_with_full_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let starts_on = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

    let pass = MemberProductRepository::new(db)
        .create(NewMemberProduct {
            member_id: member.id,
            product_id: product.id,
            coach_id: None,
            total_count: Some(8),
            starts_on,
            expires_on: Some(starts_on + Duration::days(30)),
        })
        .await?;

    assert_eq!(pass.total_count, Some(8));
    assert_eq!(pass.remaining_count, Some(8));
    assert_eq!(pass.status, MemberProductStatus::Active);
    assert_eq!(pass.starts_on, starts_on);

    Ok(())
}

/// Tests an uncounted time pass.
///
/// Expected: both counts stored as NULL
#[tokio::test]
async fn stores_uncounted_pass() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;

    let pass = MemberProductRepository::new(db)
        .create(NewMemberProduct {
            member_id: member.id,
            product_id: product.id,
            coach_id: None,
            total_count: None,
            starts_on: Utc::now().date_naive(),
            expires_on: None,
        })
        .await?;

    assert_eq!(pass.total_count, None);
    assert_eq!(pass.remaining_count, None);

    Ok(())
}
