//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, reactions};
use crate::state::AppState;

/// Create the main API router with all domain routes
pub fn create_router() -> Router<AppState> {
    Router::new().route(
        "/livestreams/:livestream_id/reaction",
        get(reactions::list_reactions).post(reactions::post_reaction),
    )
}

/// Health check routes (mounted outside the domain routes)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
