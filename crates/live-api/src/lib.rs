//! # live-api
//!
//! REST API server built with Axum framework.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the server entry points for binaries and test harnesses
pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
