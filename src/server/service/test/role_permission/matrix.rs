use super::*;

/// Tests the matrix of a role without overrides.
///
/// Expected: one row per area, none overridden
#[tokio::test]
async fn covers_every_area_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matrix = RolePermissionService::new(db).matrix("FRONT").await?;

    assert_eq!(matrix.len(), all_areas().len());
    assert!(matrix.iter().all(|row| !row.overridden));

    Ok(())
}

/// Tests role names given in a different case.
///
/// Expected: same matrix as the stored value
#[tokio::test]
async fn role_name_is_case_insensitive() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RolePermissionService::new(db);

    assert_eq!(service.matrix("coach").await?, service.matrix("COACH").await?);

    Ok(())
}

/// Tests an unknown role name.
///
/// Expected: every flag false
#[tokio::test]
async fn unknown_role_gets_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matrix = RolePermissionService::new(db).matrix("JANITOR").await?;

    assert!(matrix.iter().all(|row| row.flags == PermissionFlags::NONE));

    Ok(())
}

/// Tests the effective flags of ADMIN.
///
/// Expected: every flag true in every area
#[tokio::test]
async fn admin_always_has_all() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RolePermissionService::new(db);
    for area in all_areas() {
        assert_eq!(service.flags(Role::Admin, area).await?, PermissionFlags::ALL);
    }

    Ok(())
}
