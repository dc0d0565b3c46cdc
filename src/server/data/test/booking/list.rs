use super::*;

/// Tests filtering by date range and status.
///
/// Expected: bookings inside the range with the requested status, ordered by date
#[tokio::test]
async fn filters_by_range_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let day = |d| NaiveDate::from_ymd_opt(2026, 7, d).unwrap();

    let later = BookingFactory::new(db, facility.id)
        .booking_date(day(3))
        .build()
        .await?;
    let earlier = BookingFactory::new(db, facility.id)
        .booking_date(day(2))
        .build()
        .await?;
    BookingFactory::new(db, facility.id)
        .booking_date(day(2))
        .times(time(14, 0), time(15, 0))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;
    BookingFactory::new(db, facility.id)
        .booking_date(day(9))
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .list(&BookingFilter {
            from: Some(day(1)),
            to: Some(day(5)),
            status: Some(BookingStatus::Pending),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests filtering by member.
///
/// Expected: only the member's booking
#[tokio::test]
async fn filters_by_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let member = factory::create_member(db).await?;
    let booking = BookingFactory::new(db, facility.id)
        .member_id(Some(member.id))
        .build()
        .await?;
    BookingFactory::new(db, facility.id)
        .times(time(12, 0), time(13, 0))
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .list(&BookingFilter {
            member_id: Some(member.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking.id);

    Ok(())
}
