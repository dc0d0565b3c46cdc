use super::*;

/// Tests the three ways a member becomes a coach's student.
///
/// Expected: assigned, pass-override and booked members, each once, by id
#[tokio::test]
async fn unions_assignment_passes_and_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let assigned = MemberFactory::new(db)
        .coach_id(Some(coach.id))
        .build()
        .await?;
    let via_pass = factory::create_member(db).await?;
    let via_booking = factory::create_member(db).await?;
    let unrelated = factory::create_member(db).await?;

    let product = factory::create_product(db).await?;
    MemberProductFactory::new(db, via_pass.id, product.id)
        .coach_id(Some(coach.id))
        .build()
        .await?;
    MemberProductFactory::new(db, assigned.id, product.id)
        .coach_id(Some(coach.id))
        .build()
        .await?;
    let facility = factory::create_facility(db).await?;
    BookingFactory::new(db, facility.id)
        .member_id(Some(via_booking.id))
        .coach_id(Some(coach.id))
        .build()
        .await?;

    let service = CoachService::new(db);
    let students = service.students(coach.id).await?;
    let ids: Vec<i32> = students.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![assigned.id, via_pass.id, via_booking.id]);
    assert!(!ids.contains(&unrelated.id));
    assert_eq!(service.student_count(coach.id).await?, 3);

    Ok(())
}

/// Tests a coach nobody is linked to.
///
/// Expected: empty list
#[tokio::test]
async fn empty_for_new_coach() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    factory::create_member(db).await?;

    let students = CoachService::new(db).students(coach.id).await?;

    assert!(students.is_empty());

    Ok(())
}
