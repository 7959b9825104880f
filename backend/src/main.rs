use std::{sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liburku_backend::{
    app::build_router, config::Config, services::holiday_source::DayOffApiSource,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liburku_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        holiday_api_url = %config.holiday_api_url,
        holiday_api_timeout_seconds = config.holiday_api_timeout_seconds,
        time_zone = %config.time_zone,
        cors_allow_origins = ?config.cors_allow_origins,
        "Loaded configuration from environment/.env"
    );

    let holiday_source = DayOffApiSource::new(
        config.holiday_api_url.clone(),
        Duration::from_secs(config.holiday_api_timeout_seconds),
    )?;

    let addr = config.bind_addr;
    let app = build_router(AppState::new(config, Arc::new(holiday_source)));

    // Start server
    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
