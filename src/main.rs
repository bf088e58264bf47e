mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, error::AppError, router, service::oauth::DiscordAuthGateway, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let discord_http = startup::setup_discord_http(&config);

    let state = AppState::new(
        db,
        Arc::new(DiscordAuthGateway::new(http_client, oauth_client)),
        Arc::new(startup::setup_guild_actions(&config, discord_http.clone())),
        startup::setup_error_reporter(&config, discord_http),
        config.dashboard_url.clone(),
    );

    let app = router::router(state).layer(startup::setup_cors(&config)?);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
