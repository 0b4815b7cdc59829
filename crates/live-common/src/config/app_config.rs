//! Application configuration
//!
//! Loaded from environment variables; a `.env` file is honored when present.
//! `API_PORT` and `DATABASE_URL` are required, everything else has a default.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(()),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Cookie session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_cookie")]
    pub cookie_name: String,
    /// Sessions expire after this many seconds of inactivity.
    #[serde(default = "default_session_inactivity")]
    pub inactivity_secs: i64,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_app_name() -> String {
    "live-server".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_session_cookie() -> String {
    "sid".to_string()
}

fn default_session_inactivity() -> i64 {
    3600
}

/// Read and parse an optional environment variable, falling back on absence
/// or a value that does not parse.
fn env_or<T: FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

fn env_string(key: &str, fallback: fn() -> String) -> String {
    env::var(key).unwrap_or_else(|_| fallback())
}

fn env_required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVar(key))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required environment variable is missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let port = env_required("API_PORT")?
            .parse()
            .map_err(|_| ConfigError::MissingVar("API_PORT"))?;

        Ok(Self {
            app: AppSettings {
                name: env_string("APP_NAME", default_app_name),
                env: env_or("APP_ENV", Environment::default()),
            },
            api: ServerConfig {
                host: env_string("API_HOST", default_host),
                port,
            },
            database: DatabaseConfig {
                url: env_required("DATABASE_URL")?,
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", default_max_connections()),
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", default_min_connections()),
            },
            session: SessionConfig {
                cookie_name: env_string("SESSION_COOKIE_NAME", default_session_cookie),
                inactivity_secs: env_or("SESSION_INACTIVITY_SECS", default_session_inactivity()),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_classification() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Development.is_development());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!("Staging".parse(), Ok(Environment::Staging));
        assert!("something-else".parse::<Environment>().is_err());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_app_name(), "live-server");
        assert_eq!(default_session_cookie(), "sid");
        assert_eq!(default_session_inactivity(), 3600);
        assert_eq!(env_or("LIVE_NO_SUCH_VAR", 7u32), 7);
    }
}
