//! Seatflow server — seat assignment for pre-registered event attendees.
//!
//! Entry point that loads configuration, connects to PostgreSQL, runs
//! migrations, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use seatflow_core::config::AppConfig;
use seatflow_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from the TOML files and environment overrides.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SEATFLOW_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Connect, migrate, and serve.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Seatflow v{}", env!("CARGO_PKG_VERSION"));

    let db = seatflow_database::DatabasePool::connect(&config.database).await?;
    seatflow_database::migration::run_migrations(db.pool()).await?;

    let result = seatflow_api::run_server(config, db.pool().clone()).await;

    db.close().await;
    result
}
