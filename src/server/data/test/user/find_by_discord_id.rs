use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id("987654321")
        .name("Voter")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(987654321).await?.unwrap();

    assert_eq!(user.discord_id, 987654321);
    assert_eq!(user.name, "Voter");

    Ok(())
}

/// Tests looking up an unknown Discord ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_discord_id(999999999).await?.is_none());

    Ok(())
}
