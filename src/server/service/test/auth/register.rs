use super::*;

/// Tests that a registered account cannot log in until approved.
///
/// Expected: PendingApproval before approval, Ok afterwards
#[tokio::test]
async fn requires_approval_before_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);
    let user = service
        .register("coach1", "secret-pw", "Coach One", Role::Coach)
        .await?;
    assert!(!user.approved);

    let before = service.login("coach1", "secret-pw").await;
    assert!(matches!(
        before,
        Err(AppError::AuthErr(AuthError::PendingApproval))
    ));

    UserService::new(db).approve(user.id).await?;
    let (_, logged_in) = service.login("coach1", "secret-pw").await?;
    assert_eq!(logged_in.role, Role::Coach);

    Ok(())
}

/// Tests registering a username that already exists.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("taken").build().await?;

    let jwt = jwt();
    let result = AuthService::new(db, &jwt)
        .register("taken", "secret-pw", "Someone", Role::Front)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating the first administrator twice.
///
/// Expected: the first call succeeds approved, the second is refused
#[tokio::test]
async fn init_admin_runs_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);

    let admin = service.init_admin("admin", "secret-pw", "Admin").await?;
    assert_eq!(admin.role, Role::Admin);
    assert!(admin.approved);

    let again = service.init_admin("admin2", "secret-pw", "Admin").await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests changing a password with the current one required.
///
/// Expected: wrong current password refused, correct one accepted
#[tokio::test]
async fn change_password_verifies_current() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .username("front1")
        .password_hash(hash_password("old-pw")?)
        .build()
        .await?;
    let users = UserService::new(db);

    let wrong = users
        .change_password(user.id, Some("bad"), "new-pw", true)
        .await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    users
        .change_password(user.id, Some("old-pw"), "new-pw", true)
        .await?;

    let jwt = jwt();
    AuthService::new(db, &jwt).login("front1", "new-pw").await?;

    Ok(())
}
