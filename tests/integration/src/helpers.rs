//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use live_api::{create_app, create_app_state};
use live_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, ServerConfig, SessionConfig,
};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Check whether the environment provides a test database.
///
/// Returns false (and the calling test should return early) when
/// DATABASE_URL is unset.
pub async fn check_test_env() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Build a config for tests from the environment
fn test_config() -> Result<AppConfig> {
    Ok(AppConfig {
        app: AppSettings {
            name: "live-server-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: std::env::var("DATABASE_URL")?,
            max_connections: 5,
            min_connections: 1,
        },
        session: SessionConfig {
            cookie_name: "sid".to_string(),
            inactivity_secs: 600,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // HTTP client with a cookie store so session cookies round-trip
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?;
        Ok(response)
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Make a POST request with a raw body and JSON content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?;
        Ok(response)
    }
}

/// Assert the response has the expected status, with the body in the message
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    anyhow::ensure!(
        status == expected,
        "expected status {expected}, got {status}; body: {body}"
    );
    Ok(())
}
