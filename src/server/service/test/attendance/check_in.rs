use super::*;

/// Tests a walk-in check-in against a pass.
///
/// Expected: one session deducted, entry linked to the attendance
#[tokio::test]
async fn walk_in_deducts_from_pass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, pass) = create_member_with_pass(db, 4).await?;

    let mut param = check_in_params(member.id);
    param.member_product_id = Some(pass.id);
    let attendance = AttendanceService::new(db).check_in(param).await?;

    assert_eq!(attendance.member_product_id, Some(pass.id));
    let passes = MemberProductService::new(db);
    assert_eq!(passes.fresh_remaining(pass.id).await?, Some(3));
    let history = passes.history(pass.id).await?;
    assert_eq!(history[0].change_amount, -1);
    assert_eq!(history[0].links.attendance_id, Some(attendance.id));

    Ok(())
}

/// Tests checking in to a PENDING booking.
///
/// Expected: booking confirmed and exactly one session deducted
#[tokio::test]
async fn pending_booking_is_confirmed_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, _, pass) = create_member_with_pass(db, 4).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;

    let mut param = check_in_params(member.id);
    param.booking_id = Some(booking.id);
    let attendance = AttendanceService::new(db).check_in(param).await?;

    assert_eq!(attendance.booking_id, Some(booking.id));
    assert_eq!(attendance.member_product_id, Some(pass.id));
    let booking = BookingService::new(db).get(booking.id).await?;
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert!(booking.product_deducted);
    let passes = MemberProductService::new(db);
    assert_eq!(passes.fresh_remaining(pass.id).await?, Some(3));
    assert_eq!(passes.history(pass.id).await?.len(), 1);

    Ok(())
}

/// Tests checking in to a booking that already deducted on confirmation.
///
/// Expected: no further deduction
#[tokio::test]
async fn confirmed_booking_is_not_charged_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, _, pass) = create_member_with_pass(db, 4).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(pass.id))
        .build()
        .await?;
    BookingService::new(db).confirm(booking.id, None).await?;

    let mut param = check_in_params(member.id);
    param.booking_id = Some(booking.id);
    AttendanceService::new(db).check_in(param).await?;

    assert_eq!(
        MemberProductService::new(db).fresh_remaining(pass.id).await?,
        Some(3)
    );

    Ok(())
}

/// Tests checking in to a booking with a pass other than the one it charged.
///
/// Expected: Err(BadRequest); no attendance and neither pass touched again
#[tokio::test]
async fn rejects_pass_other_than_booking_pass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (member, product, booked_pass) = create_member_with_pass(db, 4).await?;
    let other_pass = MemberProductFactory::new(db, member.id, product.id)
        .counts(10, 10)
        .build()
        .await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .member_product_id(Some(booked_pass.id))
        .build()
        .await?;
    BookingService::new(db).confirm(booking.id, None).await?;

    let mut param = check_in_params(member.id);
    param.booking_id = Some(booking.id);
    param.member_product_id = Some(other_pass.id);
    let result = AttendanceService::new(db).check_in(param.clone()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let passes = MemberProductService::new(db);
    assert_eq!(passes.fresh_remaining(booked_pass.id).await?, Some(3));
    assert_eq!(passes.fresh_remaining(other_pass.id).await?, Some(10));
    assert!(passes.history(other_pass.id).await?.is_empty());

    param.member_product_id = Some(booked_pass.id);
    let attendance = AttendanceService::new(db).check_in(param).await?;

    assert_eq!(attendance.member_product_id, Some(booked_pass.id));
    assert_eq!(passes.fresh_remaining(booked_pass.id).await?, Some(3));

    Ok(())
}

/// Tests a second check-in for the same booking.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_booking_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let member = factory::create_member(db).await?;
    let booking = factory::create_booking(db, facility.id, member.id).await?;

    let service = AttendanceService::new(db);
    let mut param = check_in_params(member.id);
    param.booking_id = Some(booking.id);
    service.check_in(param.clone()).await?;

    let again = service.check_in(param).await;

    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests checking in to another member's booking.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_booking_of_other_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let booking = factory::create_booking(db, facility.id, owner.id).await?;

    let mut param = check_in_params(other.id);
    param.booking_id = Some(booking.id);
    let result = AttendanceService::new(db).check_in(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a withdrawn member at the front desk.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_withdrawn_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberFactory::new(db)
        .status(MemberStatus::Withdrawn)
        .build()
        .await?;

    let result = AttendanceService::new(db)
        .check_in(check_in_params(member.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests checking out of a booked session.
///
/// Expected: check-out time set and booking COMPLETED; second check-out refused
#[tokio::test]
async fn check_out_completes_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let member = factory::create_member(db).await?;
    let booking = factory::create_booking(db, facility.id, member.id).await?;

    let service = AttendanceService::new(db);
    let mut param = check_in_params(member.id);
    param.booking_id = Some(booking.id);
    let attendance = service.check_in(param).await?;

    let checked_out = service.check_out(attendance.id).await?;

    assert!(checked_out.check_out_at.is_some());
    assert_eq!(
        BookingService::new(db).get(booking.id).await?.status,
        BookingStatus::Completed
    );
    let again = service.check_out(attendance.id).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}
