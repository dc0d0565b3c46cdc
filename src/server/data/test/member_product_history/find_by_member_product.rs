use super::*;

/// Tests that entries come back in write order with their links.
///
/// Expected: CHARGE then DEDUCT, attendance link kept on the deduction
#[tokio::test]
async fn returns_entries_in_write_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, pass) = create_member_with_pass(db, 10).await?;
    let repo = MemberProductHistoryRepository::new(db);

    repo.create(entry(pass.id, member.id, LedgerKind::Charge, 10, 10, LedgerLinks::payment(3)))
        .await?;
    repo.create(entry(pass.id, member.id, LedgerKind::Deduct, -1, 9, LedgerLinks::attendance(7)))
        .await?;

    let entries = repo.find_by_member_product(pass.id).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, LedgerKind::Charge);
    assert_eq!(entries[0].links.payment_id, Some(3));
    assert_eq!(entries[1].kind, LedgerKind::Deduct);
    assert_eq!(entries[1].change_amount, -1);
    assert_eq!(entries[1].remaining_after, Some(9));
    assert_eq!(entries[1].links.attendance_id, Some(7));

    Ok(())
}
