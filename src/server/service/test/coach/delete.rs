use super::*;

/// Tests deleting a coach that is referenced elsewhere.
///
/// Expected: coach removed and every reference cleared
#[tokio::test]
async fn clears_references() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let member = MemberFactory::new(db)
        .coach_id(Some(coach.id))
        .build()
        .await?;
    let user = UserFactory::new(db)
        .coach_id(Some(coach.id))
        .build()
        .await?;

    let service = CoachService::new(db);
    service.delete(coach.id).await?;

    assert!(matches!(
        service.get(coach.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(MemberService::new(db).get(member.id).await?.coach_id, None);
    let user = UserService::new(db)
        .get(user.id)
        .await?;
    assert_eq!(user.coach_id, None);

    Ok(())
}

/// Tests deleting a coach that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_coach_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CoachService::new(db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
