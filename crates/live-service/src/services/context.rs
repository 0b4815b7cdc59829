//! Service context - dependency container for services

use live_db::PgPool;
use sqlx::{Postgres, Transaction};

use super::error::{ServiceError, ServiceResult};

/// Dependency container passed to all services.
///
/// Holds the connection pool from which each request-scoped transaction is
/// begun. Session identity deliberately lives outside of it: it is passed
/// into the write path as a plain argument by the HTTP layer.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin the transaction that scopes one request.
    ///
    /// The returned transaction rolls back when dropped uncommitted, which
    /// covers every early-return path through a handler.
    pub async fn begin(&self) -> ServiceResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .finish()
    }
}
