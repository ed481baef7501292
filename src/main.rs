//! Roster extraction HTTP server.
//!
//! Environment:
//! - `ROSTER_ADDR`: listen address, default `127.0.0.1:3000`
//! - `ROSTER_CONFIG`: configuration directory holding `scanner.yaml`;
//!   built-in defaults are used when unset
//! - `RUST_LOG`: tracing filter, default `shift_roster=info`

use shift_roster::api::{AppState, create_router};
use shift_roster::config::ConfigLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shift_roster=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config = match std::env::var("ROSTER_CONFIG") {
        Ok(path) => {
            tracing::info!(path = %path, "Loading configuration");
            ConfigLoader::load(path)?
        }
        Err(_) => ConfigLoader::default(),
    };
    let state = AppState::new(&config)?;

    let addr = std::env::var("ROSTER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Roster API listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
