use super::*;

/// Tests storing an override.
///
/// Expected: the matrix row and the effective flags follow the override
#[tokio::test]
async fn override_takes_precedence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RolePermissionService::new(db);
    let flags = PermissionFlags::new(true, false, false, false);
    service.update("FRONT", Area::Payment, flags).await?;

    let matrix = service.matrix("FRONT").await?;
    let row = matrix.iter().find(|row| row.area == Area::Payment).unwrap();
    assert!(row.overridden);
    assert_eq!(row.flags, flags);
    assert_eq!(service.flags(Role::Front, Area::Payment).await?, flags);

    Ok(())
}

/// Tests writing the same override twice.
///
/// Expected: the second write replaces the first
#[tokio::test]
async fn update_replaces_existing_override() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RolePermissionService::new(db);
    service
        .update("COACH", Area::Member, PermissionFlags::NONE)
        .await?;
    service
        .update("COACH", Area::Member, PermissionFlags::ALL)
        .await?;

    assert_eq!(
        service.flags(Role::Coach, Area::Member).await?,
        PermissionFlags::ALL
    );

    Ok(())
}

/// Tests changing ADMIN or an unknown role.
///
/// Expected: Err(BadRequest) for both
#[tokio::test]
async fn rejects_admin_and_unknown_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RolePermissionService::new(db);

    let admin = service
        .update("ADMIN", Area::User, PermissionFlags::NONE)
        .await;
    let unknown = service
        .update("JANITOR", Area::User, PermissionFlags::ALL)
        .await;

    assert!(matches!(admin, Err(AppError::BadRequest(_))));
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests resetting a role's overrides.
///
/// Expected: overrides removed and defaults back in effect
#[tokio::test]
async fn reset_restores_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RolePermissionService::new(db);
    service
        .update("FRONT", Area::Member, PermissionFlags::NONE)
        .await?;
    service
        .update("FRONT", Area::Booking, PermissionFlags::NONE)
        .await?;

    let removed = service.reset("front").await?;

    assert_eq!(removed, 2);
    assert!(service
        .matrix("FRONT")
        .await?
        .iter()
        .all(|row| !row.overridden));

    Ok(())
}
