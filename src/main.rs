//! Server binary for the Time & Billing Engine.
//!
//! Loads the billing rate book and serves the HTTP API. Configuration via
//! environment variables:
//! - `TIMEBILL_CONFIG_DIR`: rate book directory (default `./config/billing`)
//! - `TIMEBILL_PORT`: listen port (default 8080)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timebill_engine::api::{AppState, create_router};
use timebill_engine::config::RateBook;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("TIMEBILL_CONFIG_DIR").unwrap_or_else(|_| "./config/billing".to_string());
    let port: u16 = match env::var("TIMEBILL_PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("TIMEBILL_PORT must be a port number, got '{}'", value))?,
        Err(_) => 8080,
    };

    let rate_book = RateBook::load(&config_dir)
        .with_context(|| format!("failed to load rate book from {}", config_dir))?;
    info!(
        organization = %rate_book.metadata().organization,
        version = %rate_book.metadata().version,
        config_dir = %config_dir,
        "Rate book loaded"
    );

    let state = AppState::new(rate_book);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .await
        .context("server exited with an error")?;

    Ok(())
}
