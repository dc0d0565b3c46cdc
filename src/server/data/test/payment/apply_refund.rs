use super::*;

/// Tests recording a partial refund.
///
/// Expected: refunded amount, status, reason and approver stored
#[tokio::test]
async fn records_refund_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(&params(None, 100_000, PaymentStatus::Completed), at(3, 1, 10))
        .await?;

    let refunded = repo
        .apply_refund(
            payment.id,
            RefundUpdate {
                refunded_amount: 30_000,
                status: PaymentStatus::PartiallyRefunded,
                reason: "Injury".to_string(),
                approver: Some("manager".to_string()),
                at: at(3, 5, 9),
            },
        )
        .await?
        .unwrap();

    assert_eq!(refunded.refunded_amount, 30_000);
    assert_eq!(refunded.refundable(), 70_000);
    assert_eq!(refunded.status, PaymentStatus::PartiallyRefunded);
    assert_eq!(refunded.refund_reason.as_deref(), Some("Injury"));
    assert_eq!(refunded.refund_approved_by.as_deref(), Some("manager"));
    assert_eq!(refunded.method, PaymentMethod::Cash);
    assert_eq!(refunded.category, PaymentCategory::Product);

    Ok(())
}
