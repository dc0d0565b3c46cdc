use super::*;

/// Tests detecting a phone number used by another member.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_existing_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .phone("01012345678")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(repo.phone_taken("01012345678", None).await?);
    assert!(!repo.phone_taken("01012345678", Some(member.id)).await?);

    Ok(())
}

/// Tests an unused phone number.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unused_phone_is_free() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let result = MemberRepository::new(db)
        .phone_taken("01099998888", None)
        .await?;

    assert!(!result);

    Ok(())
}
