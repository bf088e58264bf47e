use super::*;

/// Tests creating a new user.
///
/// Verifies that upserting an unknown Discord ID inserts a user that has never
/// voted.
///
/// Expected: Ok with user created and last_voted_at unset
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.last_voted_at, None);

    Ok(())
}

/// Tests updating an existing user.
///
/// Verifies that upserting a known Discord ID updates the name while keeping the
/// recorded vote time.
///
/// Expected: Ok with name updated and last_voted_at preserved
#[tokio::test]
async fn updates_name_and_keeps_vote_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let voted_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    UserFactory::new(db)
        .discord_id("123456789")
        .name("OldName")
        .last_voted_at(voted_at)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "NewName".to_string(),
        })
        .await?;

    assert_eq!(user.name, "NewName");
    assert_eq!(user.last_voted_at, Some(voted_at));

    Ok(())
}
