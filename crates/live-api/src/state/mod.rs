//! Application state shared across handlers

use std::sync::Arc;

use live_common::AppConfig;
use live_db::PgPool;
use live_service::ServiceContext;

/// State handed to every handler: the service context plus configuration.
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Service context with all dependencies
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shortcut to the database pool, for probes
    pub fn pool(&self) -> &PgPool {
        self.service_context.pool()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config.app.name)
            .finish_non_exhaustive()
    }
}
