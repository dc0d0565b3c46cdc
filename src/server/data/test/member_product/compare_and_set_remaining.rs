use super::*;

/// Tests a write guarded by the current remaining count.
///
/// Expected: Ok(true) and the new count stored
#[tokio::test]
async fn writes_when_count_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pass) = create_member_with_pass(db, 5).await?;

    let repo = MemberProductRepository::new(db);
    let written = repo
        .compare_and_set_remaining(pass.id, 5, 4, MemberProductStatus::Active)
        .await?;

    assert!(written);
    let stored = repo.find_by_id(pass.id).await?.unwrap();
    assert_eq!(stored.remaining_count, Some(4));

    Ok(())
}

/// Tests a write based on a stale read.
///
/// Expected: Ok(false) and the stored count unchanged
#[tokio::test]
async fn rejects_stale_expected_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pass) = create_member_with_pass(db, 5).await?;

    let repo = MemberProductRepository::new(db);
    let written = repo
        .compare_and_set_remaining(pass.id, 3, 2, MemberProductStatus::Active)
        .await?;

    assert!(!written);
    let stored = repo.find_by_id(pass.id).await?.unwrap();
    assert_eq!(stored.remaining_count, Some(5));

    Ok(())
}

/// Tests that the status is written together with the count.
///
/// Expected: status USED_UP at zero
#[tokio::test]
async fn writes_status_with_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pass) = create_member_with_pass(db, 1).await?;

    let repo = MemberProductRepository::new(db);
    repo.compare_and_set_remaining(pass.id, 1, 0, MemberProductStatus::UsedUp)
        .await?;

    let stored = entity::prelude::MemberProduct::find_by_id(pass.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.remaining_count, Some(0));
    assert_eq!(stored.status, MemberProductStatus::UsedUp);

    Ok(())
}
