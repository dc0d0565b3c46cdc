use super::*;

/// Tests collecting members of a coach's bookings.
///
/// Expected: member ids of the coach's bookings, rentals without member skipped
#[tokio::test]
async fn collects_members_of_coach_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let coach = factory::create_coach(db).await?;
    let member = factory::create_member(db).await?;

    BookingFactory::new(db, facility.id)
        .coach_id(Some(coach.id))
        .member_id(Some(member.id))
        .build()
        .await?;
    BookingFactory::new(db, facility.id)
        .coach_id(Some(coach.id))
        .times(time(12, 0), time(13, 0))
        .build()
        .await?;

    let ids = BookingRepository::new(db)
        .member_ids_by_coach(coach.id)
        .await?;

    assert_eq!(ids, vec![member.id]);

    Ok(())
}
