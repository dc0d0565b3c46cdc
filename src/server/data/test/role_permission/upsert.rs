use super::*;

/// Tests inserting then replacing an override.
///
/// Expected: one stored override holding the latest flags
#[tokio::test]
async fn inserts_then_replaces_override() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RolePermissionRepository::new(db);
    repo.upsert("FRONT", Area::Product, PermissionFlags::ALL)
        .await?;
    repo.upsert("FRONT", Area::Product, PermissionFlags::new(true, false, true, false))
        .await?;

    let stored = repo.find_by_role("FRONT").await?;

    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0],
        (Area::Product, PermissionFlags::new(true, false, true, false))
    );

    Ok(())
}

/// Tests that overrides are scoped to their role and area.
///
/// Expected: lookup of another role or area finds nothing
#[tokio::test]
async fn scopes_override_to_role_and_area() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RolePermissionRepository::new(db);
    repo.upsert("COACH", Area::Payment, PermissionFlags::ALL)
        .await?;

    assert_eq!(
        repo.find("COACH", Area::Payment).await?,
        Some(PermissionFlags::ALL)
    );
    assert_eq!(repo.find("FRONT", Area::Payment).await?, None);
    assert_eq!(repo.find("COACH", Area::Member).await?, None);

    Ok(())
}
