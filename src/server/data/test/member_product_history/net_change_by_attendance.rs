use super::*;

/// Tests grouping attendance-linked entries per pass.
///
/// Expected: one net change per pass, unrelated entries ignored
#[tokio::test]
async fn groups_linked_changes_per_pass() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, first) = create_member_with_pass(db, 10).await?;
    let (_, _, second) = create_member_with_pass(db, 10).await?;
    let repo = MemberProductHistoryRepository::new(db);

    let linked = LedgerLinks::attendance(42);
    repo.create(entry(first.id, member.id, LedgerKind::Deduct, -1, 9, linked))
        .await?;
    repo.create(entry(first.id, member.id, LedgerKind::Deduct, -1, 8, linked))
        .await?;
    repo.create(entry(second.id, member.id, LedgerKind::Deduct, -1, 9, linked))
        .await?;
    repo.create(entry(first.id, member.id, LedgerKind::Deduct, -1, 7, LedgerLinks::default()))
        .await?;

    let totals = repo.net_change_by_attendance(42).await?;

    assert_eq!(totals, vec![(first.id, -2), (second.id, -1)]);

    Ok(())
}

/// Tests detaching entries from an attendance.
///
/// Expected: linked entries lose the attendance id and no longer group
#[tokio::test]
async fn unlink_clears_attendance_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, pass) = create_member_with_pass(db, 10).await?;
    let repo = MemberProductHistoryRepository::new(db);

    repo.create(entry(pass.id, member.id, LedgerKind::Deduct, -1, 9, LedgerLinks::attendance(5)))
        .await?;

    let unlinked = repo.unlink_attendance(5).await?;

    assert_eq!(unlinked, 1);
    assert!(repo.net_change_by_attendance(5).await?.is_empty());
    let entries = repo.find_by_member_product(pass.id).await?;
    assert_eq!(entries[0].links.attendance_id, None);

    Ok(())
}
