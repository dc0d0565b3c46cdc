use super::*;

/// Tests confirming a booking linked to a pass.
///
/// Expected: one session deducted with the booking linked; a second confirm is refused
#[tokio::test]
async fn confirm_deducts_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, _, pass) = create_member_with_pass(db, 3).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;

    let service = BookingService::new(db);
    let confirmed = service.confirm(booking.id, None).await?;

    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert!(confirmed.product_deducted);
    let passes = MemberProductService::new(db);
    assert_eq!(passes.fresh_remaining(pass.id).await?, Some(2));
    let history = passes.history(pass.id).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, LedgerKind::Deduct);
    assert_eq!(history[0].links.booking_id, Some(booking.id));

    let again = service.confirm(booking.id, None).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert_eq!(passes.fresh_remaining(pass.id).await?, Some(2));

    Ok(())
}

/// Tests confirming against a pass with nothing left.
///
/// Expected: Err(BadRequest) and the booking stays PENDING
#[tokio::test]
async fn confirm_fails_on_used_up_pass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let member = factory::create_member(db).await?;
    let product = factory::create_product(db).await?;
    let pass = MemberProductFactory::new(db, member.id, product.id)
        .counts(5, 0)
        .status(MemberProductStatus::UsedUp)
        .build()
        .await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service.confirm(booking.id, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(booking.id).await?.status, BookingStatus::Pending);

    Ok(())
}

/// Tests cancelling a confirmed booking.
///
/// Expected: the deducted session is credited back
#[tokio::test]
async fn cancel_restores_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, _, pass) = create_member_with_pass(db, 1).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;

    let service = BookingService::new(db);
    service.confirm(booking.id, None).await?;
    let passes = MemberProductService::new(db);
    assert_eq!(passes.get(pass.id).await?.status, MemberProductStatus::UsedUp);

    let cancelled = service.cancel(booking.id, None).await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(!cancelled.product_deducted);
    let restored = passes.get(pass.id).await?;
    assert_eq!(restored.remaining_count, Some(1));
    assert_eq!(restored.status, MemberProductStatus::Active);

    Ok(())
}

/// Tests cancelling a confirmed booking the member already checked in to.
///
/// Expected: Err(BadRequest) and the session stays spent; cancelling works
/// once the attendance is deleted
#[tokio::test]
async fn cancel_rejects_checked_in_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, _, pass) = create_member_with_pass(db, 4).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;

    let service = BookingService::new(db);
    service.confirm(booking.id, None).await?;
    let attendance = AttendanceService::new(db)
        .check_in(CheckInParams {
            member_id: member.id,
            booking_id: Some(booking.id),
            member_product_id: None,
            memo: None,
            created_by: None,
        })
        .await?;

    let result = service.cancel(booking.id, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(booking.id).await?.status, BookingStatus::Confirmed);
    let passes = MemberProductService::new(db);
    assert_eq!(passes.fresh_remaining(pass.id).await?, Some(3));

    AttendanceService::new(db).delete(attendance.id, None).await?;
    service.cancel(booking.id, None).await?;

    assert_eq!(passes.fresh_remaining(pass.id).await?, Some(4));

    Ok(())
}

/// Tests cancelling a booking that never deducted.
///
/// Expected: CANCELLED without any ledger entry
#[tokio::test]
async fn cancel_pending_writes_no_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, _, pass) = create_member_with_pass(db, 3).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;

    BookingService::new(db).cancel(booking.id, None).await?;

    let history = MemberProductService::new(db).history(pass.id).await?;
    assert!(history.is_empty());

    Ok(())
}

/// Tests a no-show after confirmation.
///
/// Expected: NO_SHOW with the session kept; later cancellation refused
#[tokio::test]
async fn no_show_keeps_deduction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, _, pass) = create_member_with_pass(db, 3).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;

    let service = BookingService::new(db);
    service.confirm(booking.id, None).await?;
    let no_show = service.no_show(booking.id).await?;

    assert_eq!(no_show.status, BookingStatus::NoShow);
    assert_eq!(
        MemberProductService::new(db).fresh_remaining(pass.id).await?,
        Some(2)
    );
    let cancel = service.cancel(booking.id, None).await;
    assert!(matches!(cancel, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting bookings in different states.
///
/// Expected: CONFIRMED refused, CANCELLED removed
#[tokio::test]
async fn delete_only_pending_or_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let confirmed = BookingFactory::new(db, facility.id)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let cancelled = BookingFactory::new(db, facility.id)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let service = BookingService::new(db);
    let refused = service.delete(confirmed.id).await;
    service.delete(cancelled.id).await?;

    assert!(matches!(refused, Err(AppError::BadRequest(_))));
    assert!(matches!(
        service.get(cancelled.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
