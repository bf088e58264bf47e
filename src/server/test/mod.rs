use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use mockall::predicate::eq;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use url::Url;

use crate::{
    model::api::{DefaultApiResponse, ErrorDto, HelloDto},
    server::{
        error::{auth::AuthError, AppError},
        router::router,
        service::{
            guild::{ActionOutcome, MockGuildActions},
            oauth::{AuthGateway, AuthorizedUser, DiscordIdentity, MockAuthGateway},
            report::MockErrorReporter,
        },
        state::AppState,
    },
};


const DASHBOARD_URL: &str = "https://dashboard.example.com";

/// Collaborators of one router under test.
///
/// A mock panics on calls it has no expectation for, so each test only sets up
/// the calls it expects.
struct Collaborators {
    auth: MockAuthGateway,
    guild_actions: MockGuildActions,
    error_reporter: MockErrorReporter,
}

impl Collaborators {
    fn new() -> Self {
        Self {
            auth: MockAuthGateway::new(),
            guild_actions: MockGuildActions::new(),
            error_reporter: MockErrorReporter::new(),
        }
    }

    /// Accepts any number of failure reports.
    fn reporting_anything(mut self) -> Self {
        self.error_reporter
            .expect_report()
            .returning(|_, _, _| Ok(()));
        self
    }

    /// Identifies `key` as `discord_id` on every call.
    fn identifying(mut self, key: &'static str, discord_id: u64) -> Self {
        self.auth
            .expect_identify()
            .withf(move |k| k == key)
            .returning(move |_| Ok(identity(discord_id)));
        self
    }

    fn into_router(self, db: &DatabaseConnection) -> Router {
        router(AppState::new(
            db.clone(),
            Arc::new(self.auth),
            Arc::new(self.guild_actions),
            Arc::new(self.error_reporter),
            DASHBOARD_URL.to_string(),
        ))
    }
}

async fn test_db() -> TestContext {
    TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap()
}

fn identity(discord_id: u64) -> DiscordIdentity {
    DiscordIdentity {
        discord_id,
        name: format!("User {}", discord_id),
    }
}

async fn send(app: Router, method: Method, uri: &str, key: Option<&str>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        request = request.header(header::AUTHORIZATION, key);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
