use super::*;

/// Tests overlapping and touching ranges against a PENDING booking.
///
/// Expected: overlap inside the range, none for ranges that only touch
#[tokio::test]
async fn detects_overlap_but_not_touching_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    BookingFactory::new(db, facility.id)
        .booking_date(date())
        .times(time(10, 0), time(11, 0))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(repo
        .has_overlap(facility.id, date(), time(10, 30), time(11, 30), None)
        .await?);
    assert!(repo
        .has_overlap(facility.id, date(), time(9, 0), time(12, 0), None)
        .await?);
    assert!(!repo
        .has_overlap(facility.id, date(), time(11, 0), time(12, 0), None)
        .await?);
    assert!(!repo
        .has_overlap(facility.id, date(), time(9, 0), time(10, 0), None)
        .await?);

    Ok(())
}

/// Tests that released bookings do not block the slot.
///
/// Expected: no overlap with CANCELLED or COMPLETED bookings
#[tokio::test]
async fn ignores_released_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    for status in [BookingStatus::Cancelled, BookingStatus::Completed] {
        BookingFactory::new(db, facility.id)
            .booking_date(date())
            .times(time(10, 0), time(11, 0))
            .status(status)
            .build()
            .await?;
    }

    let overlap = BookingRepository::new(db)
        .has_overlap(facility.id, date(), time(10, 0), time(11, 0), None)
        .await?;

    assert!(!overlap);

    Ok(())
}

/// Tests moving a booking within its own time range.
///
/// Expected: the excluded booking does not conflict with itself
#[tokio::test]
async fn excludes_given_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let booking = BookingFactory::new(db, facility.id)
        .booking_date(date())
        .times(time(10, 0), time(11, 0))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let overlap = BookingRepository::new(db)
        .has_overlap(facility.id, date(), time(10, 30), time(11, 30), Some(booking.id))
        .await?;

    assert!(!overlap);

    Ok(())
}

/// Tests bookings of another facility or day.
///
/// Expected: no overlap
#[tokio::test]
async fn other_facility_or_day_is_free() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let other = factory::create_facility(db).await?;
    BookingFactory::new(db, other.id)
        .booking_date(date())
        .times(time(10, 0), time(11, 0))
        .build()
        .await?;
    BookingFactory::new(db, facility.id)
        .booking_date(date().succ_opt().unwrap())
        .times(time(10, 0), time(11, 0))
        .build()
        .await?;

    let overlap = BookingRepository::new(db)
        .has_overlap(facility.id, date(), time(10, 0), time(11, 0), None)
        .await?;

    assert!(!overlap);

    Ok(())
}
