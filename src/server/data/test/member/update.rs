use super::*;

/// Tests that only provided fields change.
///
/// Expected: name and grade updated, phone and number untouched
#[tokio::test]
async fn applies_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let updated = MemberRepository::new(db)
        .update(
            member.id,
            UpdateMemberParams {
                name: Some("Renamed".to_string()),
                grade: Some(Grade::RegularMember),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.grade, Grade::RegularMember);
    assert_eq!(updated.phone, member.phone);
    assert_eq!(updated.member_number, member.member_number);
    assert_eq!(updated.registration_seq, member.registration_seq);

    Ok(())
}

/// Tests clearing the coach assignment with an explicit null.
///
/// Expected: coach_id becomes None
#[tokio::test]
async fn clears_coach_with_explicit_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let member = factory::member::MemberFactory::new(db)
        .coach_id(Some(coach.id))
        .build()
        .await?;

    let updated = MemberRepository::new(db)
        .update(
            member.id,
            UpdateMemberParams {
                coach_id: Some(None),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.coach_id, None);

    Ok(())
}

/// Tests updating a missing member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db)
        .update(999, UpdateMemberParams::default(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
