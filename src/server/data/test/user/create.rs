use super::*;

/// Tests creating an account pending approval.
///
/// Expected: active account with approved=false and no last login
#[tokio::test]
async fn creates_active_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "front1".to_string(),
            password_hash: "hash".to_string(),
            name: "Front Desk".to_string(),
            role: Role::Front,
            approved: false,
        })
        .await?;

    assert_eq!(user.username, "front1");
    assert!(user.active);
    assert!(!user.approved);
    assert!(user.last_login_at.is_none());

    Ok(())
}

/// Tests the unique username constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = || CreateUserParams {
        username: "dup".to_string(),
        password_hash: "hash".to_string(),
        name: "Dup".to_string(),
        role: Role::Front,
        approved: false,
    };

    repo.create(params()).await?;
    let result = repo.create(params()).await;

    assert!(result.is_err());

    Ok(())
}
