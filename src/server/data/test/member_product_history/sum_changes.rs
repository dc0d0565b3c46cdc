use super::*;

/// Tests summing signed changes of one pass.
///
/// Expected: 10 - 2 + 1 = 9, entries of other passes ignored
#[tokio::test]
async fn sums_signed_changes_of_one_pass() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, pass) = create_member_with_pass(db, 10).await?;
    let (other_member, _, other_pass) = create_member_with_pass(db, 5).await?;
    let repo = MemberProductHistoryRepository::new(db);

    let none = LedgerLinks::default();
    repo.create(entry(pass.id, member.id, LedgerKind::Charge, 10, 10, none))
        .await?;
    repo.create(entry(pass.id, member.id, LedgerKind::Deduct, -2, 8, none))
        .await?;
    repo.create(entry(pass.id, member.id, LedgerKind::Adjust, 1, 9, none))
        .await?;
    repo.create(entry(other_pass.id, other_member.id, LedgerKind::Charge, 5, 5, none))
        .await?;

    let sum = repo.sum_changes(pass.id).await?;

    assert_eq!(sum, 9);

    Ok(())
}

/// Tests a pass without entries.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_ledger_sums_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pass) = create_member_with_pass(db, 10).await?;

    let sum = MemberProductHistoryRepository::new(db)
        .sum_changes(pass.id)
        .await?;

    assert_eq!(sum, 0);

    Ok(())
}
