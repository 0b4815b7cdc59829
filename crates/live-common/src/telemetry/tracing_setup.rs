//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter used when `RUST_LOG` is not set
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
        }
    }
}

impl TracingConfig {
    /// Structured JSON logging for production deployments
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
        }
    }
}

/// Initialize the tracing subscriber with default configuration
///
/// Uses the `RUST_LOG` environment variable for filtering if set,
/// otherwise defaults to "info" level.
///
/// # Panics
/// Panics if a subscriber is already installed.
pub fn init_tracing() {
    try_init_tracing().expect("tracing subscriber already initialized");
}

/// Initialize the tracing subscriber, reporting failure instead of panicking
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_with_config(TracingConfig::default())
}

fn try_init_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Errors from subscriber initialization
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("tracing subscriber already initialized")]
    AlreadyInitialized,
}
