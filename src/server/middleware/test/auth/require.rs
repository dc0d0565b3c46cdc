use super::*;

/// Tests that a logged-in user passes an empty requirement list.
///
/// Expected: Ok(User) for the token's user
#[tokio::test]
async fn allows_authenticated_user_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(Role::Front).build().await?;
    let caller = current(user.id, Role::Front);

    let guarded = AuthGuard::new(db, &caller).require(&[]).await?;

    assert_eq!(guarded.id, user.id);

    Ok(())
}

/// Tests the admin requirement against a manager.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(Role::Manager).build().await?;
    let caller = current(user.id, Role::Manager);

    let result = AuthGuard::new(db, &caller)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests that area flags come from the role defaults.
///
/// Expected: FRONT may create payments but not delete them
#[tokio::test]
async fn checks_default_area_flags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(Role::Front).build().await?;
    let caller = current(user.id, Role::Front);
    let guard = AuthGuard::new(db, &caller);

    assert!(guard
        .require(&[Permission::create(Area::Payment)])
        .await
        .is_ok());
    assert!(matches!(
        guard.require(&[Permission::delete(Area::Payment)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests that a stored override replaces the default.
///
/// Expected: Err(AccessDenied) once FRONT loses view on members
#[tokio::test]
async fn honours_stored_override() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(Role::Front).build().await?;
    let caller = current(user.id, Role::Front);

    RolePermissionService::new(db)
        .update("FRONT", Area::Member, PermissionFlags::NONE)
        .await?;

    let result = AuthGuard::new(db, &caller)
        .require(&[Permission::view(Area::Member)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests that the stored role wins over the role in the token.
///
/// Expected: Err(AccessDenied) for a token claiming ADMIN on a COACH account
#[tokio::test]
async fn uses_stored_role_not_token_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(Role::Coach).build().await?;
    let caller = current(user.id, Role::Admin);

    let result = AuthGuard::new(db, &caller)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests a token whose account was deactivated after issue.
///
/// Expected: Err(Deactivated)
#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .role(Role::Manager)
        .active(false)
        .build()
        .await?;
    let caller = current(user.id, Role::Manager);

    let result = AuthGuard::new(db, &caller).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Deactivated))
    ));

    Ok(())
}

/// Tests a token for an account that no longer exists.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn rejects_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = current(999, Role::Admin);

    let result = AuthGuard::new(db, &caller).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(999)))
    ));

    Ok(())
}
