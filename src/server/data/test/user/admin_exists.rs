use super::*;

/// Tests detecting an existing ADMIN account.
///
/// Verifies that an admin counts even before it is approved, so a second
/// bootstrap admin cannot be created.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .role(Role::Admin)
        .approved(false)
        .build()
        .await?;

    let result = UserRepository::new(db).admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when only staff accounts exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    UserFactory::new(db).role(Role::Manager).build().await?;

    let result = UserRepository::new(db).admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
