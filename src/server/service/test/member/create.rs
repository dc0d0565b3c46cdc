use super::*;

/// Tests numbering of consecutive registrations.
///
/// Expected: sequences 1 and 2 with `M<seq><8-digit suffix>` numbers
#[tokio::test]
async fn assigns_sequence_and_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let first = service
        .create(create_params("Kim", "010-1234-5678"))
        .await?;
    let second = service
        .create(create_params("Lee", "010-8765-4321"))
        .await?;

    assert_eq!(first.registration_seq, 1);
    assert_eq!(first.phone, "01012345678");
    assert_eq!(first.member_number, "M112345678");
    assert_eq!(second.registration_seq, 2);
    assert_eq!(second.member_number, "M287654321");

    Ok(())
}

/// Tests registering a phone number that is already in use.
///
/// Expected: Err(BadRequest) regardless of formatting
#[tokio::test]
async fn rejects_duplicate_phone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    service.create(create_params("Kim", "01012345678")).await?;

    let result = service
        .create(create_params("Park", "010 1234 5678"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a phone number with no digits.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_phone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberService::new(db)
        .create(create_params("Kim", "--"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests assigning a coach that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_coach() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = create_params("Kim", "01012345678");
    param.coach_id = Some(999);
    let result = MemberService::new(db).create(param).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests searching by name fragment.
///
/// Expected: only the matching member on the page
#[tokio::test]
async fn search_matches_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    service.create(create_params("Kim Minsu", "01011112222")).await?;
    service.create(create_params("Lee Jiho", "01033334444")).await?;

    let page = service
        .search(MemberSearchParams {
            query: Some("Minsu".to_string()),
            page: 0,
            per_page: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Kim Minsu");

    Ok(())
}
