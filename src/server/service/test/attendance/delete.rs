use super::*;

/// Tests deleting a check-in that consumed a session.
///
/// Expected: session credited back, ledger entries kept without the attendance link
#[tokio::test]
async fn credits_back_deducted_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, pass) = create_member_with_pass(db, 2).await?;
    let service = AttendanceService::new(db);
    let mut param = check_in_params(member.id);
    param.member_product_id = Some(pass.id);
    let attendance = service.check_in(param).await?;

    service.delete(attendance.id, None).await?;

    let passes = MemberProductService::new(db);
    assert_eq!(passes.fresh_remaining(pass.id).await?, Some(2));
    let history = passes.history(pass.id).await?;
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|e| e.links.attendance_id.is_none()));
    assert!(matches!(
        service.get(attendance.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a check-in that consumed nothing.
///
/// Expected: Ok with no ledger entry written
#[tokio::test]
async fn without_pass_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, pass) = create_member_with_pass(db, 2).await?;
    let service = AttendanceService::new(db);
    let attendance = service.check_in(check_in_params(member.id)).await?;

    service.delete(attendance.id, None).await?;

    assert!(MemberProductService::new(db)
        .history(pass.id)
        .await?
        .is_empty());

    Ok(())
}
