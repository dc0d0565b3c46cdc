use super::*;

/// Tests rewriting legacy day names.
///
/// Expected: named days rewritten, numeric and unreadable values left alone
#[tokio::test]
async fn rewrites_named_days() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let facility = factory::create_facility(db).await?;
    let named = factory::create_slot(db, facility.id, "Tuesday", time(9), time(21), true).await?;
    let numeric = factory::create_slot(db, facility.id, "3", time(9), time(21), true).await?;
    let broken = factory::create_slot(db, facility.id, "someday", time(9), time(21), true).await?;

    let changed = FacilitySlotRepository::new(db)
        .normalize_legacy_days()
        .await?;

    assert_eq!(changed, 1);
    let day = |model: Option<entity::facility_slot::Model>| model.unwrap().day_of_week;
    assert_eq!(day(entity::prelude::FacilitySlot::find_by_id(named.id).one(db).await?), "2");
    assert_eq!(day(entity::prelude::FacilitySlot::find_by_id(numeric.id).one(db).await?), "3");
    assert_eq!(
        day(entity::prelude::FacilitySlot::find_by_id(broken.id).one(db).await?),
        "someday"
    );

    Ok(())
}
