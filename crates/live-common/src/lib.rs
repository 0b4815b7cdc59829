//! # live-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, ServerConfig,
    SessionConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
