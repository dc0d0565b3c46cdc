use super::*;

/// Tests a booking overlapping a pending one at the same facility.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    BookingFactory::new(db, facility.id)
        .times(time(10, 0), time(11, 0))
        .build()
        .await?;

    let result = BookingService::new(db)
        .create(booking_params(facility.id, time(10, 30), time(11, 30)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests back-to-back bookings and a slot freed by a cancellation.
///
/// Expected: both bookings are accepted
#[tokio::test]
async fn allows_adjacent_and_cancelled_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    BookingFactory::new(db, facility.id)
        .times(time(10, 0), time(11, 0))
        .build()
        .await?;
    BookingFactory::new(db, facility.id)
        .times(time(12, 0), time(13, 0))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let service = BookingService::new(db);
    let adjacent = service
        .create(booking_params(facility.id, time(11, 0), time(12, 0)))
        .await?;
    let freed = service
        .create(booking_params(facility.id, time(12, 0), time(13, 0)))
        .await?;

    assert_eq!(adjacent.status, BookingStatus::Pending);
    assert_eq!(freed.status, BookingStatus::Pending);

    Ok(())
}

/// Tests a booking outside the weekday's opening hours.
///
/// Expected: Err(BadRequest) outside, Ok inside
#[tokio::test]
async fn respects_opening_hours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    factory::create_slot(
        db,
        facility.id,
        day_of(tomorrow()).to_string(),
        time(9, 0),
        time(18, 0),
        true,
    )
    .await?;

    let service = BookingService::new(db);
    let late = service
        .create(booking_params(facility.id, time(17, 30), time(18, 30)))
        .await;
    let inside = service
        .create(booking_params(facility.id, time(9, 0), time(10, 0)))
        .await;

    assert!(matches!(late, Err(AppError::BadRequest(_))));
    assert!(inside.is_ok());

    Ok(())
}

/// Tests a weekday marked closed.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_closed_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    factory::create_slot(
        db,
        facility.id,
        day_of(tomorrow()).to_string(),
        time(9, 0),
        time(18, 0),
        false,
    )
    .await?;

    let result = BookingService::new(db)
        .create(booking_params(facility.id, time(10, 0), time(11, 0)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an empty time range.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inverted_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;

    let result = BookingService::new(db)
        .create(booking_params(facility.id, time(11, 0), time(11, 0)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests linking a pass owned by a different member.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_pass_of_other_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let (_, _, pass) = create_member_with_pass(db, 5).await?;
    let other = factory::create_member(db).await?;

    let mut param = booking_params(facility.id, time(10, 0), time(11, 0));
    param.member_id = Some(other.id);
    param.member_product_id = Some(pass.id);
    let result = BookingService::new(db).create(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rescheduling onto a slot held by another booking.
///
/// Expected: Err(BadRequest); moving within its own slot is fine
#[tokio::test]
async fn reschedule_checks_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    BookingFactory::new(db, facility.id)
        .times(time(14, 0), time(15, 0))
        .build()
        .await?;
    let service = BookingService::new(db);
    let booking = service
        .create(booking_params(facility.id, time(10, 0), time(11, 0)))
        .await?;

    let clash = service
        .update(
            booking.id,
            UpdateBookingParams {
                start_time: Some(time(14, 30)),
                end_time: Some(time(15, 30)),
                ..Default::default()
            },
        )
        .await;
    let shifted = service
        .update(
            booking.id,
            UpdateBookingParams {
                start_time: Some(time(10, 30)),
                end_time: Some(time(11, 30)),
                ..Default::default()
            },
        )
        .await?;

    assert!(matches!(clash, Err(AppError::BadRequest(_))));
    assert_eq!(shifted.start_time, time(10, 30));

    Ok(())
}
