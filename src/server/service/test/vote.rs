use super::*;
use crate::server::service::vote::{VoteService, VOTE_COOLDOWN};

/// Tests a first vote from a user the gateway has never seen.
///
/// Expected: Ok, user created with last_voted_at == now
#[tokio::test]
async fn records_vote_for_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VoteService::new(db).vote(&voter(2001), now()).await?;

    let user = UserRepository::new(db).find_by_discord_id(2001).await?.unwrap();
    assert_eq!(user.last_voted_at, Some(now()));
    assert_eq!(user.name, "Voter 2001");

    Ok(())
}

/// Tests a vote 11 hours after the previous one.
///
/// Expected: Err(VoteErr) with one hour left and the stored time untouched
#[tokio::test]
async fn rejects_vote_within_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let previous = now() - Duration::hours(11);
    UserFactory::new(db)
        .discord_id("2002")
        .last_voted_at(previous)
        .build()
        .await?;

    let result = VoteService::new(db).vote(&voter(2002), now()).await;

    assert!(matches!(
        result,
        Err(AppError::VoteErr(err)) if err.retry_after() == Duration::hours(1)
    ));
    let user = UserRepository::new(db).find_by_discord_id(2002).await?.unwrap();
    assert_eq!(user.last_voted_at, Some(previous));

    Ok(())
}

/// Tests a vote 13 hours after the previous one.
///
/// Expected: Ok with last_voted_at moved to now
#[tokio::test]
async fn accepts_vote_after_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id("2003")
        .last_voted_at(now() - Duration::hours(13))
        .build()
        .await?;

    VoteService::new(db).vote(&voter(2003), now()).await?;

    let user = UserRepository::new(db).find_by_discord_id(2003).await?.unwrap();
    assert_eq!(user.last_voted_at, Some(now()));

    Ok(())
}

/// Tests two concurrent votes from the same user with a stale record.
///
/// Both requests may read the old timestamp and pass the policy check, but only
/// one can win the conditional update.
///
/// Expected: exactly one Ok, the other a rate limit
#[tokio::test]
async fn only_one_of_two_concurrent_votes_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id("2004")
        .last_voted_at(now() - Duration::days(2))
        .build()
        .await?;

    let service = VoteService::new(db);
    let voter = voter(2004);
    let (first, second) = tokio::join!(service.vote(&voter, now()), service.vote(&voter, now()));

    let results = [first, second];
    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(succeeded, 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(AppError::VoteErr(VoteError::RateLimited { retry_after })) if *retry_after <= VOTE_COOLDOWN
    )));

    Ok(())
}

/// Tests that the conditional update alone refuses a stale second writer.
///
/// Simulates the losing request: it evaluated the policy against the stale record,
/// but the winner has since recorded a vote.
///
/// Expected: Ok(false) from the check-and-set
#[tokio::test]
async fn check_and_set_refuses_stale_reader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("2005").build().await?;
    let repo = UserRepository::new(db);

    let stale = repo.find_by_discord_id(2005).await?.unwrap();
    assert!(crate::server::service::vote::validate_can_vote(stale.last_voted_at, now()).is_ok());

    VoteService::new(db).vote(&voter(2005), now()).await?;

    assert!(!repo.try_record_vote(2005, now(), VOTE_COOLDOWN).await?);

    Ok(())
}
