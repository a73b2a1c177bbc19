//! LightBnB database bootstrap
//!
//! Connects to PostgreSQL, applies migrations and checks that the data-access
//! layer is ready to serve queries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lightbnb::{config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lightbnb={},sqlx=warn", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting LightBnB v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::connect(config).await?;
    tracing::info!("Connected to database");

    state.repository.migrate().await?;
    tracing::info!("Database migrations completed");

    state.repository.ping().await?;
    tracing::info!(
        default_limit = state.config.search.default_limit,
        max_limit = state.config.search.max_limit,
        "Data-access layer ready"
    );

    Ok(())
}
