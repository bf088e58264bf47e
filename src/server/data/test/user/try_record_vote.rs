use super::*;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
}

/// Tests recording the first vote of a user.
///
/// Expected: Ok(true) and last_voted_at set to `now`
#[tokio::test]
async fn records_first_vote() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("1001").build().await?;

    let repo = UserRepository::new(db);
    let recorded = repo
        .try_record_vote(1001, now(), Duration::hours(12))
        .await?;

    assert!(recorded);
    let user = repo.find_by_discord_id(1001).await?.unwrap();
    assert_eq!(user.last_voted_at, Some(now()));

    Ok(())
}

/// Tests voting again inside the cooldown window.
///
/// Expected: Ok(false) and last_voted_at unchanged
#[tokio::test]
async fn refuses_vote_within_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let previous = now() - Duration::hours(11);
    UserFactory::new(db)
        .discord_id("1002")
        .last_voted_at(previous)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let recorded = repo
        .try_record_vote(1002, now(), Duration::hours(12))
        .await?;

    assert!(!recorded);
    let user = repo.find_by_discord_id(1002).await?.unwrap();
    assert_eq!(user.last_voted_at, Some(previous));

    Ok(())
}

/// Tests voting exactly one cooldown after the previous vote.
///
/// Expected: Ok(true), the boundary is inclusive
#[tokio::test]
async fn accepts_vote_at_cooldown_boundary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id("1003")
        .last_voted_at(now() - Duration::hours(12))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let recorded = repo
        .try_record_vote(1003, now(), Duration::hours(12))
        .await?;

    assert!(recorded);

    Ok(())
}

/// Tests that the same vote cannot be recorded twice.
///
/// Expected: first call Ok(true), second call Ok(false)
#[tokio::test]
async fn second_vote_at_same_time_is_refused() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("1004").build().await?;

    let repo = UserRepository::new(db);

    assert!(repo.try_record_vote(1004, now(), Duration::hours(12)).await?);
    assert!(!repo.try_record_vote(1004, now(), Duration::hours(12)).await?);

    Ok(())
}

/// Tests recording a vote for a user that does not exist.
///
/// Expected: Ok(false), nothing is inserted
#[tokio::test]
async fn refuses_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.try_record_vote(1005, now(), Duration::hours(12)).await?);
    assert!(repo.find_by_discord_id(1005).await?.is_none());

    Ok(())
}
