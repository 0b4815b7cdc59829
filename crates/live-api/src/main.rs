//! Live API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p live-api
//! ```
//!
//! Configuration comes from environment variables (optionally via .env).

use live_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = serve().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting live API server"
    );

    live_api::run(config).await?;
    Ok(())
}
