use super::*;

/// Tests replacing a facility's weekly slots.
///
/// Expected: previous slots removed, new slots stored as "1".."7" in day order
#[tokio::test]
async fn replaces_previous_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    factory::create_slot(db, facility.id, "MONDAY", time(8), time(20), true).await?;

    let repo = FacilitySlotRepository::new(db);
    repo.replace(
        facility.id,
        &[
            Slot {
                day_of_week: 6,
                open_time: time(10),
                close_time: time(18),
                is_open: true,
            },
            Slot {
                day_of_week: 2,
                open_time: time(9),
                close_time: time(22),
                is_open: true,
            },
        ],
    )
    .await?;

    let slots = repo.find_by_facility(facility.id).await?;
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].day_of_week, 2);
    assert_eq!(slots[1].day_of_week, 6);

    let stored = entity::prelude::FacilitySlot::find().all(db).await?;
    let mut days: Vec<String> = stored.into_iter().map(|s| s.day_of_week).collect();
    days.sort();
    assert_eq!(days, vec!["2".to_string(), "6".to_string()]);

    Ok(())
}

/// Tests reading legacy day names.
///
/// Expected: "SATURDAY" is read as day 6
#[tokio::test]
async fn reads_legacy_day_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    factory::create_slot(db, facility.id, "SATURDAY", time(10), time(16), true).await?;

    let slot = FacilitySlotRepository::new(db)
        .find_for_day(facility.id, 6)
        .await?;

    assert!(slot.is_some());
    assert_eq!(slot.unwrap().open_time, time(10));

    Ok(())
}
