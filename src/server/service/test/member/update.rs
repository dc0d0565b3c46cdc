use super::*;

/// Tests changing a member's phone number.
///
/// Expected: number re-derived from the original sequence and the new phone
#[tokio::test]
async fn phone_change_regenerates_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    service.create(create_params("Kim", "01011111111")).await?;
    let member = service.create(create_params("Lee", "01022222222")).await?;

    let updated = service
        .update(
            member.id,
            UpdateMemberParams {
                phone: Some("010-5555-6666".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.registration_seq, 2);
    assert_eq!(updated.phone, "01055556666");
    assert_eq!(updated.member_number, "M255556666");

    Ok(())
}

/// Tests an update that leaves the phone untouched.
///
/// Expected: member number unchanged
#[tokio::test]
async fn name_change_keeps_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let member = service.create(create_params("Kim", "01012345678")).await?;

    let updated = service
        .update(
            member.id,
            UpdateMemberParams {
                name: Some("  Kim Minsu ".to_string()),
                phone: Some("01012345678".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Kim Minsu");
    assert_eq!(updated.member_number, member.member_number);

    Ok(())
}

/// Tests switching to a phone number another member uses.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_phone_of_other_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    service.create(create_params("Kim", "01011111111")).await?;
    let member = service.create(create_params("Lee", "01022222222")).await?;

    let result = service
        .update(
            member.id,
            UpdateMemberParams {
                phone: Some("01011111111".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a backdate edit that also carries other fields.
///
/// Expected: only joined_on changes; name, phone and number stay
#[tokio::test]
async fn backdate_only_touches_join_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let member = service.create(create_params("Kim", "01012345678")).await?;
    let joined_on = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();

    let updated = service
        .update(
            member.id,
            UpdateMemberParams {
                name: Some("Other".to_string()),
                phone: Some("01099998888".to_string()),
                joined_on: Some(joined_on),
                backdate_only: true,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.joined_on, joined_on);
    assert_eq!(updated.name, "Kim");
    assert_eq!(updated.phone, "01012345678");
    assert_eq!(updated.member_number, member.member_number);

    Ok(())
}

/// Tests a backdate edit without a date.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn backdate_requires_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let result = MemberService::new(db)
        .update(
            member.id,
            UpdateMemberParams {
                backdate_only: true,
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the soft delete.
///
/// Expected: member kept with status WITHDRAWN
#[tokio::test]
async fn delete_withdraws_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = MemberService::new(db);

    service.delete(member.id).await?;

    assert_eq!(service.get(member.id).await?.status, MemberStatus::Withdrawn);

    Ok(())
}
