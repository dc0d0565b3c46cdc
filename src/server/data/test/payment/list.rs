use super::*;

/// Tests filtering by member and inclusive date range.
///
/// Expected: the member's payments inside the range, newest first
#[tokio::test]
async fn filters_by_member_and_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let repo = PaymentRepository::new(db);

    let first = repo
        .create(&params(Some(member.id), 10_000, PaymentStatus::Completed), at(4, 1, 0))
        .await?;
    let last_day = repo
        .create(&params(Some(member.id), 20_000, PaymentStatus::Completed), at(4, 30, 23))
        .await?;
    repo.create(&params(Some(member.id), 30_000, PaymentStatus::Completed), at(5, 1, 0))
        .await?;
    repo.create(&params(None, 40_000, PaymentStatus::Completed), at(4, 10, 12))
        .await?;

    let payments = repo
        .list(&PaymentFilter {
            member_id: Some(member.id),
            from: Some(at(4, 1, 0).date_naive()),
            to: Some(at(4, 30, 0).date_naive()),
            status: None,
        })
        .await?;

    let ids: Vec<i32> = payments.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![last_day.id, first.id]);

    Ok(())
}
