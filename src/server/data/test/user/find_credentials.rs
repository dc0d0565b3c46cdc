use super::*;

/// Tests loading an account with its password hash.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .username("coach1")
        .password_hash("$argon2id$stub")
        .build()
        .await?;

    let result = UserRepository::new(db).find_credentials("coach1").await?;

    let (user, hash) = result.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(hash, "$argon2id$stub");

    Ok(())
}

/// Tests an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_credentials("ghost").await?;

    assert!(result.is_none());

    Ok(())
}
