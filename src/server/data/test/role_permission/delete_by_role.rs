use super::*;

/// Tests dropping every override of one role.
///
/// Expected: the role's overrides deleted, other roles kept
#[tokio::test]
async fn deletes_only_given_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RolePermissionRepository::new(db);
    repo.upsert("FRONT", Area::Member, PermissionFlags::NONE)
        .await?;
    repo.upsert("FRONT", Area::Booking, PermissionFlags::NONE)
        .await?;
    repo.upsert("MANAGER", Area::User, PermissionFlags::ALL)
        .await?;

    let deleted = repo.delete_by_role("FRONT").await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_role("FRONT").await?.is_empty());
    assert_eq!(repo.find_by_role("MANAGER").await?.len(), 1);

    Ok(())
}
