//! Liveness and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use live_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Liveness probe, always healthy while the process runs
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness probe; degraded when the database is unreachable
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = state.pool().acquire().await.is_ok();

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse::ready(db_healthy)))
}
