use anyhow::{Context, Result};
use pokedeep_gateway::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("failed to load configuration")?;

    // RUST_LOG wins over the configured level.
    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());
    let filter = log_level.parse::<EnvFilter>().with_context(|| {
        format!("invalid log level '{log_level}': valid levels are error, warn, info, debug, trace")
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting pokedeep gateway with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
