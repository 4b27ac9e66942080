pub mod api;
pub mod config;
pub mod core_state;
pub mod dashboard;
pub mod engine;
pub mod models;
pub mod workflow;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};
use crate::core_state::{CoreError, CoreState};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Initial batch failed: {0}")]
    Core(#[from] CoreError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = ServerConfig::from_env()?;
    tracing::info!(
        bind_addr = %server_config.bind_addr,
        batch_size = server_config.batch_size,
        seeded = server_config.seed.is_some(),
        "Configuration loaded"
    );

    let core = Arc::new(CoreState::new(&server_config)?);

    api::serve(core, server_config.bind_addr)
        .await
        .map_err(StartupError::Server)
}
