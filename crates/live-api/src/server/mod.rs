//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use live_common::{AppConfig, AppError};
use live_db::create_pool;
use live_service::ServiceContext;
use tokio::net::TcpListener;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    let router = Router::new()
        .merge(health_routes())
        .merge(create_router())
        .layer(session_layer);

    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );

    router.with_state(state)
}

/// Build the cookie-keyed session layer.
///
/// The session store is the collaborator that session verification reads
/// from; establishing sessions (login) belongs to the user-management flow.
fn create_session_layer(config: &AppConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.session.cookie_name.clone())
        .with_secure(config.app.env.is_production())
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(
            config.session.inactivity_secs,
        )))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = live_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let service_context = ServiceContext::new(pool);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
