use super::*;

/// Tests which payments count towards revenue.
///
/// Expected: COMPLETED and refunded payments, PENDING and CANCELLED skipped
#[tokio::test]
async fn skips_pending_and_cancelled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    for status in [
        PaymentStatus::Completed,
        PaymentStatus::PartiallyRefunded,
        PaymentStatus::Refunded,
        PaymentStatus::Pending,
        PaymentStatus::Cancelled,
    ] {
        repo.create(&params(None, 1_000, status), at(6, 1, 12)).await?;
    }

    let settled = repo.find_settled_in_range(None, None).await?;

    assert_eq!(settled.len(), 3);
    assert!(settled
        .iter()
        .all(|p| !matches!(p.status, PaymentStatus::Pending | PaymentStatus::Cancelled)));

    Ok(())
}
