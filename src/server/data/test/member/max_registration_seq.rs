use super::*;

/// Tests the sequence of an empty member table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db).max_registration_seq().await?;

    assert_eq!(result, 0);

    Ok(())
}

/// Tests that the highest sequence is returned regardless of insert order.
///
/// Expected: Ok(7)
#[tokio::test]
async fn returns_highest_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(new_member(7, "01000000007")).await?;
    repo.create(new_member(3, "01000000003")).await?;

    let result = repo.max_registration_seq().await?;

    assert_eq!(result, 7);

    Ok(())
}
